//! Signal matching over subject and body text

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::SignalCatalog;

/// Signals found in one message, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct MatchedSignals(Vec<String>);

impl MatchedSignals {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|s| s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Repeated identifiers are dropped, keeping the first occurrence.
impl From<Vec<String>> for MatchedSignals {
    fn from(ids: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        Self(ids.into_iter().filter(|id| seen.insert(id.clone())).collect())
    }
}

/// Scans messages against a [`SignalCatalog`]
#[derive(Debug, Clone, Default)]
pub struct SignalMatcher {
    catalog: SignalCatalog,
}

impl SignalMatcher {
    #[must_use]
    pub const fn new(catalog: SignalCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &SignalCatalog {
        &self.catalog
    }

    /// Return every catalog signal present in the subject or the body.
    ///
    /// Text is ASCII lower-cased once up front. Presence is all that counts,
    /// so each signal stops at its first hit.
    #[must_use]
    pub fn match_signals(&self, subject: &str, body: &str) -> MatchedSignals {
        let subject_lower = subject.to_ascii_lowercase();
        let body_lower = body.to_ascii_lowercase();
        let folded = (subject_lower.as_str(), body_lower.as_str());
        let original = (subject, body);

        let mut matched = Vec::new();

        for pattern in self.catalog.patterns() {
            if pattern.is_present(folded, original) {
                matched.push(pattern.id().to_string());
            }
        }

        for airline in self.catalog.airlines() {
            if subject_lower.contains(airline.as_str()) || body_lower.contains(airline.as_str()) {
                matched.push(airline.clone());
            }
        }

        MatchedSignals(matched)
    }
}
