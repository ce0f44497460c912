//! # hours-engine
//!
//! Deterministic open/closed status computation over free-text weekly
//! opening-hours records.
//!
//! Venue hours arrive as heterogeneous strings — Japanese and English day
//! names, half a dozen time spellings, multi-session fields, last-order
//! markers, cross-midnight sessions. This crate normalizes them and
//! answers two questions: is the venue open right now, and what status
//! line should the UI show.
//!
//! ## Design Principle
//!
//! Every function is a pure function of its arguments plus an explicit
//! caller-supplied "now" — no clock access inside the engine, no shared
//! state, no I/O. And nothing here ever fails: malformed time data is
//! skipped, not rejected, so the status functions are total over arbitrary
//! string input. All interpretation of ambiguity is pushed to the UI by
//! resolving every degraded state to one of the three status values or a
//! readable fallback string.
//!
//! ## Modules
//!
//! - [`record`] — The raw [`OpeningHours`] entry as supplied by ingestion
//! - [`time`] — Time-token recognition ([`ParsedTime`]) and conversion
//! - [`day`] — Weekday label normalization, aliasing, and matching
//! - [`session`] — Multi-session expansion and last-order grace handling
//! - [`status`] — The open/closed/unknown decision procedure
//! - [`display`] — Status-string rendering and the per-weekday view
//! - [`error`] — Error types

pub mod day;
pub mod display;
pub mod error;
pub mod record;
pub mod session;
pub mod status;
pub mod time;

pub use day::{
    canonical_weekday, day_aliases, days_match, normalize_day_name, weekday_long, weekday_offset,
    weekday_short,
};
pub use display::{
    format_business_hours, format_business_hours_at, format_business_hours_for_weekday,
    format_business_hours_offset, format_time_range, organize_detailed_hours, DayHours,
    DetailedOpeningHours, ALL_DAY_TEXT, CLOSED_TODAY_TEXT, UNKNOWN_HOURS_TEXT,
};
pub use error::HoursError;
pub use record::OpeningHours;
pub use session::{
    effective_close_minutes, expand_sessions, has_last_order_marker, TimeRange,
    LAST_ORDER_GRACE_MINUTES,
};
pub use status::{business_status, business_status_at, BusinessStatus};
pub use time::{normalize_time, parse_time, time_to_minutes, ParsedTime, END_OF_DAY_MINUTES};
