//! Candidate extraction from booking bodies
//!
//! Everything returned here is a shape match, not a validated value: a
//! "date" may not exist on any calendar and a "flight number" may be a
//! postcode.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum candidates kept per field
pub const DEFAULT_CANDIDATE_LIMIT: usize = 5;

// Regex patterns, applied in this order
static DATE_REGEXES: std::sync::LazyLock<[Regex; 4]> = std::sync::LazyLock::new(|| {
    [
        // 14 Jan 2025
        Regex::new(r"\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}")
            .unwrap(),
        // Jan 14, 2025
        Regex::new(r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4}")
            .unwrap(),
        Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap(),
        Regex::new(r"\d{2}-\d{2}-\d{4}").unwrap(),
    ]
});

static FLIGHT_NUMBER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\s*\d{3,4}\b").unwrap());

/// Candidate fields pulled out of a message body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Date-shaped substrings, by pattern then by position
    pub travel_dates: Vec<String>,

    /// Flight-number-shaped substrings, by position
    pub flight_numbers: Vec<String>,
}

impl ExtractedFields {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.travel_dates.is_empty() && self.flight_numbers.is_empty()
    }
}

/// Scans original-case body text for dates and flight numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldExtractor {
    limit: usize,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_LIMIT)
    }
}

impl FieldExtractor {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Extract candidates from the body.
    ///
    /// Date matches from all four patterns are concatenated without dedup
    /// before the limit is applied, so an early pattern with many hits can
    /// crowd out later ones.
    #[must_use]
    pub fn extract(&self, body: &str) -> ExtractedFields {
        let travel_dates = DATE_REGEXES
            .iter()
            .flat_map(|re| re.find_iter(body))
            .take(self.limit)
            .map(|m| m.as_str().to_string())
            .collect();

        let flight_numbers = FLIGHT_NUMBER_REGEX
            .find_iter(body)
            .take(self.limit)
            .map(|m| m.as_str().to_string())
            .collect();

        ExtractedFields {
            travel_dates,
            flight_numbers,
        }
    }
}
