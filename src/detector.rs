//! Booking detection pipeline: match, classify, extract, build

use tracing::debug;

use crate::classifier::BookingClassifier;
use crate::config::DetectorConfig;
use crate::error::Result;
use crate::extracted::FieldExtractor;
use crate::matcher::{MatchedSignals, SignalMatcher};
use crate::types::{BookingRecord, DecodedMessage};

/// Outcome of matching and classifying one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub matched: MatchedSignals,
    pub is_booking: bool,
}

/// Stateless booking detector. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct BookingDetector {
    matcher: SignalMatcher,
    classifier: BookingClassifier,
    extractor: FieldExtractor,
}

impl BookingDetector {
    #[must_use]
    pub const fn new(
        matcher: SignalMatcher,
        classifier: BookingClassifier,
        extractor: FieldExtractor,
    ) -> Self {
        Self {
            matcher,
            classifier,
            extractor,
        }
    }

    /// Build a detector from configuration
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        let catalog = config.compile_catalog()?;

        Ok(Self::new(
            SignalMatcher::new(catalog),
            BookingClassifier::new(config.threshold),
            FieldExtractor::new(config.max_candidates),
        ))
    }

    #[must_use]
    pub const fn matcher(&self) -> &SignalMatcher {
        &self.matcher
    }

    #[must_use]
    pub const fn classifier(&self) -> &BookingClassifier {
        &self.classifier
    }

    #[must_use]
    pub const fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    /// Match and classify without extracting
    #[must_use]
    pub fn evaluate(&self, message: &DecodedMessage) -> Evaluation {
        let matched = self.matcher.match_signals(&message.subject, &message.body);
        let is_booking = self.classifier.classify(&matched);

        debug!(
            "Evaluated {:?}: {} signals, booking={}",
            message.subject,
            matched.len(),
            is_booking
        );

        Evaluation {
            matched,
            is_booking,
        }
    }

    /// Run the full pipeline. Extraction only happens for bookings.
    #[must_use]
    pub fn detect(&self, message: &DecodedMessage) -> Option<BookingRecord> {
        let Evaluation {
            matched,
            is_booking,
        } = self.evaluate(message);

        if !is_booking {
            return None;
        }

        let fields = self.extractor.extract(&message.body);
        debug!(
            "Booking from {}: {} dates, {} flight numbers",
            message.sender,
            fields.travel_dates.len(),
            fields.flight_numbers.len()
        );

        Some(BookingRecord::build(message, matched, fields))
    }

    /// Detect over a sequence, keeping input order
    pub fn detect_all<'a, I>(&self, messages: I) -> Vec<BookingRecord>
    where
        I: IntoIterator<Item = &'a DecodedMessage>,
    {
        messages
            .into_iter()
            .filter_map(|message| self.detect(message))
            .collect()
    }
}
