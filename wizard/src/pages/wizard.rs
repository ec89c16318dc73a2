//! Wizard page: step panels, navigation and prediction submit.
//!
//! ARCHITECTURE
//! ============
//! Handlers here translate clicks into `WizardState` transitions and perform
//! the browser side effects the state asks for: alerts are drained after each
//! transition and scroll sequence changes are observed by effects. The only
//! asynchronous work is the prediction request, spawned on the local task
//! queue.

use leptos::prelude::*;
use schema::ApplicationRecord;

use crate::components::result_card::ResultCard;
use crate::components::review_summary::ReviewSummary;
use crate::components::step_panel::StepPanel;
use crate::components::step_progress::StepProgress;
use crate::config::WizardConfig;
use crate::net::predict;
use crate::state::form::FormState;
use crate::state::wizard::WizardState;
use crate::util::browser;
use crate::util::collect::collect;

const WIZARD_REGION_ID: &str = "wizard";

#[component]
pub fn WizardPage() -> impl IntoView {
    let config = expect_context::<WizardConfig>();
    let form = expect_context::<RwSignal<FormState>>();
    let wizard = expect_context::<RwSignal<WizardState>>();
    let predict_path = config.predict_path;

    Effect::new(move |seen: Option<u64>| {
        let seq = wizard.with(|w| w.wizard_scroll_seq);
        if seen.is_some_and(|s| s != seq) {
            browser::scroll_into_view(WIZARD_REGION_ID);
        }
        seq
    });
    Effect::new(move |seen: Option<u64>| {
        let seq = wizard.with(|w| w.result_scroll_seq);
        if seen.is_some_and(|s| s != seq) {
            browser::scroll_into_view(crate::components::result_card::RESULT_REGION_ID);
        }
        seq
    });

    let on_next = move |_| {
        form.with_untracked(|f| {
            wizard.update(|w| {
                w.advance(f);
            });
        });
        show_pending_alert(wizard);
    };
    let on_prev = move |_| wizard.update(WizardState::retreat);
    let on_review = move |_| {
        form.with_untracked(|f| {
            wizard.update(|w| {
                w.jump_to_review(f);
            });
        });
        show_pending_alert(wizard);
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Enter in a text box submits the form from any step.
        if !wizard.with_untracked(WizardState::is_review_step) {
            return;
        }
        let record = form.with_untracked(collect);
        if let Err(err) = predict::guard(&record) {
            wizard.update(|w| w.raise_alert(err.user_message()));
            show_pending_alert(wizard);
            return;
        }
        if wizard.try_update(WizardState::begin_submit) != Some(true) {
            leptos::logging::warn!("submit refused: request already in flight");
            return;
        }
        dispatch(predict_path.clone(), record, wizard);
    };
    let on_reset = Callback::new(move |()| {
        form.set(FormState::default());
        wizard.update(WizardState::reset);
        browser::scroll_to_top();
    });

    let submitting = move || wizard.with(|w| w.submitting);

    view! {
        <div class="container">
            <h1 class="page-title">"Loan Eligibility Predictor"</h1>
            <div id=WIZARD_REGION_ID class="wizard">
                <StepProgress/>
                <form class="wizard-form" novalidate=true on:submit=on_submit>
                    <StepPanel index=0>
                        <div class="step-actions">
                            <button type="button" class="btn btn-primary" on:click=on_next>
                                "Next"
                            </button>
                        </div>
                    </StepPanel>
                    <StepPanel index=1>
                        <div class="step-actions">
                            <button type="button" class="btn btn-secondary" on:click=on_prev>
                                "Previous"
                            </button>
                            <button type="button" class="btn btn-primary" on:click=on_next>
                                "Next"
                            </button>
                        </div>
                    </StepPanel>
                    <StepPanel index=2>
                        <div class="step-actions">
                            <button type="button" class="btn btn-secondary" on:click=on_prev>
                                "Previous"
                            </button>
                            <button type="button" class="btn btn-primary" on:click=on_review>
                                "Review"
                            </button>
                        </div>
                    </StepPanel>
                    <StepPanel index=3>
                        <ReviewSummary/>
                        <div class="step-actions">
                            <button type="button" class="btn btn-secondary" on:click=on_prev>
                                "Previous"
                            </button>
                            <button type="submit" class="btn btn-success" disabled=submitting>
                                {move || if submitting() { "Predicting..." } else { "Predict Eligibility" }}
                            </button>
                        </div>
                    </StepPanel>
                </form>
            </div>
            <ResultCard on_reset=on_reset/>
        </div>
    }
}

/// Show and clear any alert the last transition queued.
fn show_pending_alert(wizard: RwSignal<WizardState>) {
    if let Some(message) = wizard.try_update(WizardState::take_alert).flatten() {
        browser::alert(&message);
    }
}

/// Send the record and feed the outcome back into the state machine.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn dispatch(path: String, record: ApplicationRecord, wizard: RwSignal<WizardState>) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let transport = crate::net::transport::BrowserTransport;
            let outcome = predict::submit(&transport, &path, &record).await;
            wizard.update(|w| w.finish_submit(outcome));
            show_pending_alert(wizard);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let outcome = Err(crate::net::transport::TransportError::Unavailable.into());
        wizard.update(|w| w.finish_submit(outcome));
    }
}
