//! Dropdown bound to one named form value.

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::state::wizard::WizardState;
use crate::util::fields::{FieldSpec, SelectOption};

/// A `<select>` with a blank "Select" option followed by `options`.
///
/// The blank option leaves the named value empty, which the step validator
/// treats as missing.
#[component]
pub fn SelectField(spec: FieldSpec, options: &'static [SelectOption]) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let wizard = expect_context::<RwSignal<WizardState>>();
    let name = spec.name;

    let flagged = move || wizard.with(|w| w.is_flagged(name));
    let is_blank = move || form.with(|f| f.value(name).is_none_or(str::is_empty));

    view! {
        <div class="form-group">
            <label for=name>{spec.label}</label>
            <select
                id=name
                name=name
                class="form-select"
                class:invalid=flagged
                required=spec.required
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|f| f.set_value(name, &raw));
                }
            >
                <option value="" prop:selected=is_blank>
                    "Select"
                </option>
                {options
                    .iter()
                    .map(|option| {
                        let value = option.value;
                        view! {
                            <option value=value prop:selected=move || form.with(|f| f.value(name) == Some(value))>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
