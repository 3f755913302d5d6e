//! Mailbox retrieval seam
//!
//! Connecting, authenticating and fetching belong to whatever implements
//! [`MailSource`]; this module only decides the search window and feeds
//! what comes back through the detector.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::detector::BookingDetector;
use crate::error::Result;
use crate::parser::decode_message;
use crate::types::BookingRecord;

/// Default look-back in days
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// How far back to search, counted in whole days from `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub days: u32,
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl SearchWindow {
    #[must_use]
    pub const fn new(days: u32) -> Self {
        Self { days }
    }

    /// First day included in the window
    #[must_use]
    pub fn since_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// IMAP search criterion, e.g. `SINCE 19-Sep-2026`
    #[must_use]
    pub fn since_criterion(&self, today: NaiveDate) -> String {
        format!("SINCE {}", self.since_date(today).format("%d-%b-%Y"))
    }
}

/// Anything that can hand over raw RFC 822 messages for a search criterion
pub trait MailSource {
    /// Fetch every message matching `criterion`, in mailbox order
    fn fetch_since(&mut self, criterion: &str) -> Result<Vec<Vec<u8>>>;
}

/// Fetch a window of mail and return the bookings found, in fetch order.
///
/// Messages that cannot be parsed at all are skipped. The parser accepts
/// nearly any byte sequence, so the skip is a guard rather than a common
/// path. Source errors abort the scan.
pub fn scan_mailbox<S>(
    source: &mut S,
    detector: &BookingDetector,
    window: SearchWindow,
    today: NaiveDate,
) -> Result<Vec<BookingRecord>>
where
    S: MailSource + ?Sized,
{
    let criterion = window.since_criterion(today);
    let raw_messages = source.fetch_since(&criterion)?;
    debug!("Fetched {} messages for {criterion}", raw_messages.len());

    let mut bookings = Vec::new();
    for (index, raw) in raw_messages.iter().enumerate() {
        let message = match decode_message(raw) {
            Ok(message) => message,
            Err(e) => {
                warn!("Skipping message {index}: {e}");
                continue;
            }
        };

        if let Some(record) = detector.detect(&message) {
            bookings.push(record);
        }
    }

    Ok(bookings)
}
