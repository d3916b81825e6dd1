//! Reflection record and single-result lookup outcome.
//!
//! # Responsibility
//! - Define the canonical record one store row maps to.
//! - Make the zero-vs-one distinction of exact-date lookups explicit at the
//!   type level.
//!
//! # Invariants
//! - `date` is an ISO 8601 `YYYY-MM-DD` string.
//! - `(date, language)` identifies at most one stored reflection.

use crate::model::language::LanguageCode;
use serde::{Deserialize, Serialize};

/// One language's reflection content for one calendar date.
///
/// Constructed from a query result set and never mutated afterwards. The
/// `text` body may be long; wrapping is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Opaque store key for the language variant.
    pub language: LanguageCode,
    /// Short heading.
    pub title: String,
    /// Short excerpt.
    pub quote: String,
    /// Body/commentary text.
    pub text: String,
    /// Attribution/citation.
    pub reference: String,
}

/// Outcome of an exact `(date, language)` lookup.
///
/// A missing row is a legitimate result the caller must branch on, not an
/// error; the query shape guarantees zero or one rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLookup {
    Found(Reflection),
    NotFound,
}

impl DateLookup {
    /// Converts into the found reflection, if any.
    pub fn found(self) -> Option<Reflection> {
        match self {
            Self::Found(reflection) => Some(reflection),
            Self::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::{DateLookup, Reflection};
    use crate::model::language::LanguageCode;

    fn sample() -> Reflection {
        Reflection {
            date: "2025-01-01".to_string(),
            language: LanguageCode::english(),
            title: "New Beginnings".to_string(),
            quote: "quote".to_string(),
            text: "text".to_string(),
            reference: "Ref A".to_string(),
        }
    }

    #[test]
    fn found_converts_to_some() {
        let lookup = DateLookup::Found(sample());
        assert!(!lookup.is_not_found());
        assert_eq!(lookup.found().map(|r| r.title), Some("New Beginnings".to_string()));
    }

    #[test]
    fn not_found_converts_to_none() {
        assert!(DateLookup::NotFound.is_not_found());
        assert!(DateLookup::NotFound.found().is_none());
    }

    #[test]
    fn reflection_serializes_with_reference_field() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["language"], "english");
        assert_eq!(json["reference"], "Ref A");
    }
}
