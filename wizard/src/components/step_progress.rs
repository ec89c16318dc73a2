//! Progress indicator across the top of the wizard.

use leptos::prelude::*;

use crate::state::wizard::WizardState;
use crate::util::fields::STEPS;

#[component]
pub fn StepProgress() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    view! {
        <div class="step-progress">
            {STEPS
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    view! {
                        <div class=move || wizard.with(|w| w.marker(index).css_class())>
                            <span class="step-number">{index + 1}</span>
                            <span class="step-title">{step.title}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
