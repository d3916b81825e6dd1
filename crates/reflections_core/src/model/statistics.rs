//! Store-wide summary statistics.

use crate::model::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Row counts for the whole store, derived per call and never persisted.
///
/// `total_count` always equals the sum of `by_language` values for a
/// consistent snapshot of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_count: u64,
    pub by_language: BTreeMap<LanguageCode, u64>,
}
