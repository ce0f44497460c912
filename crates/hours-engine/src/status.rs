//! The open/closed/unknown decision procedure.
//!
//! [`business_status_at`] is a pure function of the record collection and
//! a caller-supplied wall-clock instant; it never errors and never panics,
//! whatever the strings contain. Malformed sessions are skipped, not
//! rejected — the only degraded outcomes are the three status values.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::day::{days_match, weekday_long};
use crate::record::OpeningHours;
use crate::session::{effective_close_minutes, expand_sessions};
use crate::time::{time_to_minutes, END_OF_DAY_MINUTES};

/// The venue's status at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusinessStatus {
    Open,
    Closed,
    Unknown,
}

/// Decide whether the venue is open at `now`.
///
/// `now` is wall-clock local time as the caller understands it; no
/// timezone interpretation happens here. The decision:
///
/// 1. No records at all → [`BusinessStatus::Unknown`].
/// 2. No record matching today's weekday → `Unknown`.
/// 3. Every matching record marked holiday → [`BusinessStatus::Closed`].
/// 4. Otherwise, every session of every non-holiday matching record is
///    checked in record order; the first session containing `now` returns
///    [`BusinessStatus::Open`]. Sessions are a pure OR, so order never
///    changes the result.
/// 5. No session contains `now` → `Closed`.
///
/// A session whose effective close precedes its open wraps past midnight
/// and is open when `now` is at-or-after the open time or at-or-before the
/// effective close. An explicit `00:00`-`24:00` session short-circuits to
/// `Open`. A close time with a last-order marker is extended by the grace
/// period before comparison.
pub fn business_status_at(entries: &[OpeningHours], now: NaiveDateTime) -> BusinessStatus {
    if entries.is_empty() {
        return BusinessStatus::Unknown;
    }

    let today = weekday_long(now.weekday());
    let today_entries: Vec<&OpeningHours> = entries
        .iter()
        .filter(|entry| days_match(&entry.day, today))
        .collect();

    if today_entries.is_empty() {
        return BusinessStatus::Unknown;
    }
    if today_entries.iter().all(|entry| entry.is_holiday) {
        return BusinessStatus::Closed;
    }

    let now_minutes = now.hour() * 60 + now.minute();

    for entry in today_entries.iter().filter(|entry| !entry.is_holiday) {
        for pair in expand_sessions(entry) {
            let (open, close) = match (time_to_minutes(&pair.open), time_to_minutes(&pair.close)) {
                (Some(open), Some(close)) => (open, close),
                _ => continue,
            };

            if open == 0 && close == END_OF_DAY_MINUTES {
                return BusinessStatus::Open;
            }

            let effective_close = effective_close_minutes(close, &pair.close);

            let open_now = if effective_close < open {
                // Session wraps past midnight.
                now_minutes >= open || now_minutes <= effective_close
            } else {
                open <= now_minutes && now_minutes < effective_close
            };

            if open_now {
                return BusinessStatus::Open;
            }
        }
    }

    BusinessStatus::Closed
}

/// [`business_status_at`] anchored to the system clock.
///
/// Convenience for UI callers; tests and snapshot rendering should pass an
/// explicit instant instead.
pub fn business_status(entries: &[OpeningHours]) -> BusinessStatus {
    business_status_at(entries, chrono::Local::now().naive_local())
}

// ── Tests ───────────────────────────────────────────────────────────────────
