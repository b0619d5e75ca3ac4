//! orgevents_core - functional core for organization event scheduling.
//!
//! Everything in this crate is a pure transformation: no I/O, no clocks, no
//! shared state. Callers supply dates and rules and get values back.

pub mod recurrence;
pub mod serde;
