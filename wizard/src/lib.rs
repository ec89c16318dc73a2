//! # wizard
//!
//! Leptos + WASM frontend for the loan eligibility wizard.
//!
//! The applicant fills a multi-step form, reviews a summary with an EMI
//! preview, and submits it to a prediction service. The reply is rendered as
//! a verdict with reasons and improvement hints. Wire types live in the
//! `schema` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
