//! Store gateway contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the read-intent contract over the reflections table.
//! - Isolate SQL details from callers and the presentation layer.
//!
//! # Invariants
//! - The gateway never writes to the store.
//! - Semantic outcomes (`NotFound`, empty results, `NoData`) are kept
//!   distinct from storage-transport errors.

pub mod reflection_repo;
