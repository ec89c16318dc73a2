//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual controls and panels of the wizard while
//! reading/writing the form and wizard state from Leptos context providers.

pub mod number_field;
pub mod paired_slider;
pub mod result_card;
pub mod review_summary;
pub mod select_field;
pub mod step_panel;
pub mod step_progress;
