//! Core types passed across the detector boundary

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extracted::ExtractedFields;
use crate::matcher::MatchedSignals;

/// A message already reduced to plain text by the MIME layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedMessage {
    /// Decoded subject, may be empty
    pub subject: String,

    /// Raw From header value
    pub sender: String,

    /// Raw Date header value, never parsed
    pub header_date: String,

    /// Concatenated text/plain and text/html parts, attachments excluded
    pub body: String,
}

impl DecodedMessage {
    pub fn new(
        subject: impl Into<String>,
        sender: impl Into<String>,
        header_date: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            sender: sender.into(),
            header_date: header_date.into(),
            body: body.into(),
        }
    }
}

/// A message classified as a likely flight booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub subject: String,

    pub sender: String,

    /// Date header, verbatim
    pub date_received: String,

    /// Signals that matched, patterns before airline names
    pub flight_indicators: Vec<String>,

    /// Unverified date candidates (at most the extractor limit)
    pub potential_travel_dates: Vec<String>,

    /// Unverified flight number candidates (at most the extractor limit)
    pub potential_flight_numbers: Vec<String>,
}

impl BookingRecord {
    /// Assemble a record. No validation happens here.
    #[must_use]
    pub fn build(message: &DecodedMessage, matched: MatchedSignals, fields: ExtractedFields) -> Self {
        Self {
            subject: message.subject.clone(),
            sender: message.sender.clone(),
            date_received: message.header_date.clone(),
            flight_indicators: matched.into_vec(),
            potential_travel_dates: fields.travel_dates,
            potential_flight_numbers: fields.flight_numbers,
        }
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.subject, self.flight_indicators.join(", "))
    }
}
