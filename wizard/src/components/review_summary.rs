//! Confirmation summary shown on the review step.

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::util::collect::collect;
use crate::util::review::review_rows;

/// Rows are derived from a freshly collected record on every form change.
#[component]
pub fn ReviewSummary() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    view! {
        <div id="review-summary" class="review-summary">
            {move || {
                form.with(|f| review_rows(&collect(f)))
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="review-row">
                                <span class="review-label">{row.label}</span>
                                <span class="review-value">{row.value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
