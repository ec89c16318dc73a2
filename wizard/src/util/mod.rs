//! Utility helpers shared across wizard UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here except `browser` is pure: field tables, slider/text
//! syncing, validation, record collection and the review/verdict projections
//! take plain values and return plain values. `browser` isolates the few
//! `window` side effects.

pub mod browser;
pub mod collect;
pub mod field_sync;
pub mod fields;
pub mod money;
pub mod review;
pub mod validate;
pub mod verdict;
