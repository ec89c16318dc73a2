//! Plain numeric input bound to one named form value.

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::state::wizard::WizardState;
use crate::util::fields::FieldSpec;

#[component]
pub fn NumberField(spec: FieldSpec) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let wizard = expect_context::<RwSignal<WizardState>>();
    let name = spec.name;

    view! {
        <div class="form-group">
            <label for=name>{spec.label}</label>
            <input
                id=name
                name=name
                type="number"
                min="0"
                placeholder="0"
                class="form-control"
                class:invalid=move || wizard.with(|w| w.is_flagged(name))
                required=spec.required
                prop:value=move || form.with(|f| f.value(name).unwrap_or_default().to_owned())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|f| f.set_value(name, &raw));
                }
            />
        </div>
    }
}
