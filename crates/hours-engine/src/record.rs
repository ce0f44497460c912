//! The externally supplied opening-hours record.
//!
//! One record describes one day's hours as free text, exactly as the
//! upstream ingestion pipeline produced it from raw source rows. A day may
//! appear in a collection multiple times (split sessions such as lunch and
//! dinner); record order is evaluation order, never priority order.

use serde::{Deserialize, Serialize};

/// A single raw opening-hours entry for a venue.
///
/// All fields are free text in whatever spelling the source data used:
/// `day` may be a long or short Japanese weekday name or an English
/// full/abbreviated name; `open` may encode several sessions in one field
/// (`"11:00-14:00,17:00-21:00"`); `close` may carry a last-order marker
/// (`"21:00(L.O)"`). Nothing here is validated — interpretation is the
/// engine's job, and malformed pieces degrade to "skipped", never to an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Raw day label in any supported spelling.
    pub day: String,
    /// Raw opening time, possibly a compound multi-session field.
    pub open: String,
    /// Raw closing time, possibly with a last-order suffix.
    pub close: String,
    /// Whether this entry marks a scheduled holiday (regular closing day).
    /// The spreadsheet pipeline writes this key as `isHoliday`.
    #[serde(default, alias = "isHoliday")]
    pub is_holiday: bool,
}

impl OpeningHours {
    /// Convenience constructor for a non-holiday entry.
    pub fn new(day: impl Into<String>, open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            open: open.into(),
            close: close.into(),
            is_holiday: false,
        }
    }

    /// Convenience constructor for a holiday entry (times ignored by the engine).
    pub fn holiday(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            open: String::new(),
            close: String::new(),
            is_holiday: true,
        }
    }
}
