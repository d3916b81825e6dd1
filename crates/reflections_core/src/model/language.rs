//! Language codes and the display-label table.
//!
//! # Responsibility
//! - Provide the opaque language key used by store queries.
//! - Implement the single defaulting rule: blank input means `english`.
//! - Carry the display-label table as explicit configuration for the
//!   presentation layer.
//!
//! # Invariants
//! - The gateway never interprets a language code beyond defaulting.
//! - Display labels never influence query behavior.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Fallback language used whenever the caller supplies a blank code.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Opaque store key identifying one language variant of a reflection.
///
/// Ordered so that multilingual mappings iterate deterministically by code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the default `english` code.
    pub fn english() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// Applies the language-defaulting rule to raw caller input.
    ///
    /// Blank input (empty or whitespace-only) resolves to `english`; any
    /// other input is kept verbatim as an opaque key.
    pub fn resolve(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::english()
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Display label for one language: flag emoji plus localized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLabel {
    pub flag: String,
    pub name: String,
}

impl LanguageLabel {
    pub fn new(flag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            name: name.into(),
        }
    }
}

impl Display for LanguageLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

/// Configuration mapping from language code to display label.
///
/// Consumed by the presentation layer only; the gateway supplies it as
/// static configuration and never derives it from the store. Tests may
/// substitute their own table via [`LanguageTable::from_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    entries: BTreeMap<LanguageCode, LanguageLabel>,
}

impl LanguageTable {
    /// Builds the builtin table covering the shipped store languages.
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                LanguageCode::new("english"),
                LanguageLabel::new("\u{1F1FA}\u{1F1F8}", "English"),
            ),
            (
                LanguageCode::new("spanish"),
                LanguageLabel::new("\u{1F1EA}\u{1F1F8}", "Espa\u{f1}ol"),
            ),
            (
                LanguageCode::new("french"),
                LanguageLabel::new("\u{1F1EB}\u{1F1F7}", "Fran\u{e7}ais"),
            ),
            (
                LanguageCode::new("pt-BR"),
                LanguageLabel::new("\u{1F1E7}\u{1F1F7}", "Portugu\u{ea}s (Brasil)"),
            ),
        ])
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (LanguageCode, LanguageLabel)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Looks up the display label for a code, if configured.
    pub fn label(&self, code: &LanguageCode) -> Option<&LanguageLabel> {
        self.entries.get(code)
    }

    /// Iterates entries in language-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &LanguageLabel)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}
