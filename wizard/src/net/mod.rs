//! Networking for the prediction round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam (browser `fetch` via `gloo-net`, or a fake in
//! tests) and `predict` runs the guarded submit on top of it. The wire schema
//! itself lives in the `schema` crate.

pub mod predict;
pub mod transport;
