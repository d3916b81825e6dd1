//! Domain model for daily reflections.
//!
//! # Responsibility
//! - Define the record shapes shared by the store gateway and its callers.
//! - Keep language handling explicit: codes are opaque store keys, display
//!   labels are configuration.
//!
//! # Invariants
//! - Every model value is immutable after construction.
//! - A `(date, language)` pair identifies at most one reflection.

pub mod language;
pub mod reflection;
pub mod statistics;
