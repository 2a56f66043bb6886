//! Function-name remapping
//!
//! Raw function tokens extracted from stack names can be grouped under a
//! common product name for tagging, e.g. every `matcher-*` stack tagged with
//! function `matcher`. The map is an ordered list of prefix rules; the first
//! matching rule wins and unmatched tokens pass through unchanged.

use serde::{Deserialize, Serialize};

/// One remapping rule: a raw-token prefix and the canonical name it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub prefix: String,
    pub canonical: String,
}

impl MapEntry {
    pub fn new(prefix: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            canonical: canonical.into(),
        }
    }
}

/// Ordered prefix-based remapping of raw function tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMap {
    entries: Vec<MapEntry>,
}

impl FunctionMap {
    pub fn new(entries: Vec<MapEntry>) -> Self {
        Self { entries }
    }

    /// The map the original tagging run shipped with.
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    /// Resolve a raw function token to its canonical name.
    ///
    /// First matching prefix wins; a token matching no entry passes through.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| raw.starts_with(&entry.prefix))
            .map(|entry| entry.canonical.as_str())
            .unwrap_or(raw)
    }
}

impl Default for FunctionMap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Default rules, shared with the config crate's serde defaults.
pub fn builtin_entries() -> Vec<MapEntry> {
    vec![
        MapEntry::new("matcher-", "matcher"),
        MapEntry::new("sink-", "sink"),
        MapEntry::new("crowd-", "crowd"),
        MapEntry::new("matchbox-", "matchbox"),
        MapEntry::new("matching-", "matchbox"),
    ]
}
