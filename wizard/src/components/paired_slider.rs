//! Slider with a live label and, for money amounts, a synced text box.
//!
//! DESIGN
//! ======
//! Both inputs write through `FormState`, which recomputes the partner
//! control, the label and the named field together. The component only
//! forwards raw input strings.

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::state::wizard::WizardState;
use crate::util::fields::{FieldSpec, PairId};
use crate::util::money::plain_number;

#[component]
pub fn PairedSlider(spec: FieldSpec, pair: PairId) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let wizard = expect_context::<RwSignal<WizardState>>();
    let range = pair.range();
    let prefix = pair.dom_prefix();
    let slider_id = format!("{prefix}-slider");

    let text_box = pair.has_text().then(|| {
        view! {
            <input
                id=format!("{prefix}-input")
                type="text"
                inputmode="numeric"
                class="form-control"
                prop:value=move || form.with(|f| f.pair(pair).text.clone().unwrap_or_default())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|f| f.text_input(pair, &raw));
                }
            />
        }
    });

    view! {
        <div class="form-group" class:invalid=move || wizard.with(|w| w.is_flagged(spec.name))>
            <label for=slider_id.clone()>
                {spec.label}
                ": "
                <span id=format!("{prefix}-display") class="slider-value">
                    {move || form.with(|f| f.pair(pair).label.clone())}
                </span>
            </label>
            <input
                id=slider_id
                name=spec.name
                type="range"
                class="form-range"
                min=plain_number(range.min)
                max=plain_number(range.max)
                step=plain_number(range.step)
                prop:value=move || form.with(|f| plain_number(f.pair(pair).slider))
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|f| f.slider_input(pair, &raw));
                }
            />
            {text_box}
        </div>
    }
}
