//! Core data-access layer for daily multilingual reflections.
//!
//! The gateway translates read intents into parameterized queries over a
//! read-only SQLite store and maps rows into plain [`Reflection`] values.
//! All display shaping belongs to downstream presentation code.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::language::{LanguageCode, LanguageLabel, LanguageTable, DEFAULT_LANGUAGE};
pub use model::reflection::{DateLookup, Reflection};
pub use model::statistics::StatisticsSummary;
pub use repo::reflection_repo::{
    ReflectionStore, SqliteReflectionStore, StoreError, StoreResult,
};
