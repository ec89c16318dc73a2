//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `form` holds what the applicant has entered; `wizard` holds where they are
//! in the flow and what the result area shows. Both are provided as
//! `RwSignal` contexts by the root component.

pub mod form;
pub mod wizard;
