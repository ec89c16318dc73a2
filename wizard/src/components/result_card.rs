//! Result area: pending notice, error text or the rendered verdict.

use leptos::prelude::*;

use crate::state::wizard::{PENDING_MESSAGE, ResultPanel, WizardState};
use crate::util::verdict::ResultView;

pub const RESULT_REGION_ID: &str = "predict";

#[component]
pub fn ResultCard(on_reset: Callback<()>) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    view! {
        <div id=RESULT_REGION_ID class="result-area">
            {move || match wizard.with(|w| w.result.clone()) {
                ResultPanel::Hidden => ().into_any(),
                ResultPanel::Pending => {
                    view! { <div class="result-card result-card--pending">{PENDING_MESSAGE}</div> }.into_any()
                }
                ResultPanel::Failed(message) => {
                    view! {
                        <div class="result-card">
                            <div class="text-danger">{message}</div>
                        </div>
                    }
                        .into_any()
                }
                ResultPanel::Ready(ready) => verdict_card(ready, on_reset),
            }}
        </div>
    }
}

fn verdict_card(result: ResultView, on_reset: Callback<()>) -> AnyView {
    let ResultView { heading, tone, intro, reasons_title, reasons, improvements_title, improvements } = result;
    let intro = (!intro.is_empty()).then(|| view! { <p class="result-intro">{intro}</p> });

    view! {
        <div class="result-card">
            <h2 class=tone.css_class()>{heading}</h2>
            {intro}
            <h4>{reasons_title}</h4>
            <ul class="result-reasons">{bullets(reasons)}</ul>
            <h4>{improvements_title}</h4>
            <ul class="result-improvements">{bullets(improvements)}</ul>
            <button type="button" class="btn btn-primary" on:click=move |_| on_reset.run(())>
                "Predict Again"
            </button>
        </div>
    }
    .into_any()
}

fn bullets(items: Vec<String>) -> impl IntoView {
    items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()
}
