// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Flight Booking Detector
//!
//! Decides whether an email is likely a flight booking by counting weak
//! lexical signals, and pulls candidate travel dates and flight numbers out
//! of the ones that are.
//!
//! # Pipeline
//!
//! - Signal matching against an immutable catalog of phrases, shapes and
//!   airline names
//! - Threshold classification (two signals by default)
//! - Shape-based extraction of dates and flight numbers, bounded per field
//! - One [`BookingRecord`] per positive message
//!
//! Mailbox access and MIME decoding sit at the edges: [`decode_message`]
//! turns raw bytes into a [`DecodedMessage`], and [`scan_mailbox`] drives
//! any [`MailSource`].
//!
//! # Example
//!
//! ```rust
//! use flight_detect::{BookingDetector, DecodedMessage};
//!
//! let detector = BookingDetector::default();
//! let message = DecodedMessage::new(
//!     "Your Delta flight confirmation",
//!     "Delta <noreply@delta.com>",
//!     "Tue, 14 Jan 2025 09:00:00 +0000",
//!     "Flight DL123 departs 14 Jan 2025",
//! );
//!
//! let record = detector.detect(&message).unwrap();
//! assert_eq!(record.potential_travel_dates, vec!["14 Jan 2025"]);
//! assert_eq!(record.potential_flight_numbers, vec!["DL123"]);
//! ```

mod catalog;
mod classifier;
mod config;
mod detector;
mod error;
mod extracted;
mod matcher;
mod parser;
mod source;
mod types;

pub use catalog::*;
pub use classifier::*;
pub use config::DetectorConfig;
pub use detector::{BookingDetector, Evaluation};
pub use error::{DetectError, Result};
pub use extracted::*;
pub use matcher::{MatchedSignals, SignalMatcher};
pub use parser::{PartText, decode_message, decode_part};
pub use source::*;
pub use types::*;
