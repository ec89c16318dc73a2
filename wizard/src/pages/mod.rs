//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The wizard is a single page. It owns navigation and submit orchestration
//! and delegates rendering details to `components`.

pub mod wizard;
