//! Threshold rule deciding booking vs. non-booking

use crate::matcher::MatchedSignals;

/// Minimum number of matched signals for a booking
pub const DEFAULT_THRESHOLD: usize = 2;

/// Counts signals; every signal weighs the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingClassifier {
    threshold: usize,
}

impl Default for BookingClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl BookingClassifier {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub fn classify(&self, matched: &MatchedSignals) -> bool {
        matched.len() >= self.threshold
    }
}
