//! Browser side effects: blocking alerts and scrolling.
//!
//! Requires a browser environment. Outside the `csr` build these log and
//! return, which keeps the state machine and page handlers callable from
//! native tests.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a blocking `window.alert`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
