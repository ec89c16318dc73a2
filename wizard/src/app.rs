//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::WizardConfig;
use crate::pages::wizard::WizardPage;
use crate::state::form::FormState;
use crate::state::wizard::WizardState;

/// Root application component.
///
/// Provides the configuration and both state signals, then renders the wizard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = WizardConfig::default();
    let wizard = RwSignal::new(WizardState::new(&config));
    let form = RwSignal::new(FormState::default());

    provide_context(config);
    provide_context(form);
    provide_context(wizard);

    view! {
        <Title text="Loan Eligibility Predictor"/>
        <WizardPage/>
    }
}
