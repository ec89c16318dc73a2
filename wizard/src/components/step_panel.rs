//! One wizard step: its field controls plus a caller-supplied button row.

use leptos::prelude::*;

use crate::components::number_field::NumberField;
use crate::components::paired_slider::PairedSlider;
use crate::components::select_field::SelectField;
use crate::state::wizard::WizardState;
use crate::util::fields::{self, FieldKind, FieldSpec};

/// Panel for step `index`. Only the current step's panel carries `active`.
#[component]
pub fn StepPanel(index: usize, children: Children) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let (title, specs) = fields::step(index).map_or(("", &[][..]), |step| (step.title, step.fields));

    view! {
        <section class="step-panel" class:active=move || wizard.with(|w| w.panel_active(index))>
            <h3 class="step-heading">{title}</h3>
            {specs.iter().copied().map(field_control).collect_view()}
            {children()}
        </section>
    }
}

fn field_control(spec: FieldSpec) -> AnyView {
    match spec.kind {
        FieldKind::Select(options) => view! { <SelectField spec=spec options=options/> }.into_any(),
        FieldKind::Paired(pair) => view! { <PairedSlider spec=spec pair=pair/> }.into_any(),
        FieldKind::Number => view! { <NumberField spec=spec/> }.into_any(),
    }
}
