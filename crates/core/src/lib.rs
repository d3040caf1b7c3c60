//! flights_core - pure domain types, errors and repository traits.
//!
//! Nothing in this crate performs I/O. Store adapters and the repository
//! implementation live in the `flights` crate.

pub mod flight;
pub mod storage;
