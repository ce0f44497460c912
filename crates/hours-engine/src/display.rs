//! Human-facing rendering of opening hours.
//!
//! The formatter shares the engine's parsing stack but has its own
//! fallback ladder: today's hours → weekly summary → unknown. All output
//! strings are Japanese, matching the locale of the source data.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::day::{
    canonical_weekday, days_match, weekday_english, weekday_long, weekday_offset, weekday_short,
};
use crate::record::OpeningHours;
use crate::session::{expand_sessions, has_last_order_marker};
use crate::time::normalize_time;

/// Fallback when nothing renderable exists.
pub const UNKNOWN_HOURS_TEXT: &str = "営業時間不明";

/// Every matching entry for the target day is a holiday.
pub const CLOSED_TODAY_TEXT: &str = "本日定休日";

/// Rendering of an explicit all-day session.
pub const ALL_DAY_TEXT: &str = "24時間営業";

const TODAY_PREFIX: &str = "本日 ";
const LAST_ORDER_SUFFIX: &str = "(L.O)";

// ── Formatter ───────────────────────────────────────────────────────────────

/// Render the venue's hours for the weekday of `now`.
pub fn format_business_hours_at(entries: &[OpeningHours], now: NaiveDateTime) -> String {
    format_business_hours_for_weekday(entries, now.weekday())
}

/// [`format_business_hours_at`] anchored to the system clock.
///
/// Convenience for UI callers; tests and snapshot rendering should pass an
/// explicit instant instead.
pub fn format_business_hours(entries: &[OpeningHours]) -> String {
    format_business_hours_at(entries, chrono::Local::now().naive_local())
}

/// Render the venue's hours for the day `day_offset` days from `now`.
///
/// The offset is resolved with weekday-enum arithmetic rather than
/// timestamp addition, so day boundaries cannot shift under it.
pub fn format_business_hours_offset(
    entries: &[OpeningHours],
    now: NaiveDateTime,
    day_offset: i64,
) -> String {
    format_business_hours_for_weekday(entries, weekday_offset(now.weekday(), day_offset))
}

/// Render the venue's hours for an explicit target weekday.
///
/// - No entries at all → [`UNKNOWN_HOURS_TEXT`].
/// - Matching entries, all holiday → [`CLOSED_TODAY_TEXT`].
/// - Matching operating entries → `"本日 "` plus the de-duplicated,
///   comma-joined session ranges.
/// - No entry matches the target weekday → weekly summary across the
///   whole collection, or [`UNKNOWN_HOURS_TEXT`] if that too is empty.
pub fn format_business_hours_for_weekday(entries: &[OpeningHours], target: Weekday) -> String {
    if entries.is_empty() {
        return UNKNOWN_HOURS_TEXT.to_string();
    }

    let target_label = weekday_long(target);
    let matching: Vec<&OpeningHours> = entries
        .iter()
        .filter(|entry| days_match(&entry.day, target_label))
        .collect();

    if matching.is_empty() {
        let summary = weekly_summary(entries);
        return if summary.is_empty() {
            UNKNOWN_HOURS_TEXT.to_string()
        } else {
            summary
        };
    }

    let (holiday, operating): (Vec<&&OpeningHours>, Vec<&&OpeningHours>) =
        matching.iter().partition(|entry| entry.is_holiday);

    if operating.is_empty() {
        return if holiday.is_empty() {
            UNKNOWN_HOURS_TEXT.to_string()
        } else {
            CLOSED_TODAY_TEXT.to_string()
        };
    }

    let mut ranges: Vec<String> = Vec::new();
    for entry in operating {
        for pair in expand_sessions(entry) {
            if let Some(rendered) = format_time_range(&pair.open, &pair.close) {
                if !ranges.contains(&rendered) {
                    ranges.push(rendered);
                }
            }
        }
    }

    if ranges.is_empty() {
        UNKNOWN_HOURS_TEXT.to_string()
    } else {
        format!("{TODAY_PREFIX}{}", ranges.join(", "))
    }
}

/// Render one open/close pair.
///
/// Both sides must normalize; an explicit midnight-to-midnight or
/// midnight-to-`24:00` pair renders as [`ALL_DAY_TEXT`]; a last-order
/// marker on the raw close string earns the `"(L.O)"` suffix.
pub fn format_time_range(open: &str, close: &str) -> Option<String> {
    let open = normalize_time(open)?;
    let close_normalized = normalize_time(close)?;

    if open == "00:00" && (close_normalized == "24:00" || close_normalized == "00:00") {
        return Some(ALL_DAY_TEXT.to_string());
    }

    if has_last_order_marker(close) {
        Some(format!("{open}-{close_normalized}{LAST_ORDER_SUFFIX}"))
    } else {
        Some(format!("{open}-{close_normalized}"))
    }
}

/// One line summarizing the whole week: `"月:11:00-14:00 火:11:00-14:00"`.
///
/// Entries whose day label is unrecognized or whose times do not render
/// contribute nothing; holidays are omitted.
fn weekly_summary(entries: &[OpeningHours]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for entry in entries.iter().filter(|entry| !entry.is_holiday) {
        let weekday = match canonical_weekday(&entry.day) {
            Ok(weekday) => weekday,
            Err(_) => continue,
        };
        let ranges: Vec<String> = expand_sessions(entry)
            .iter()
            .filter_map(|pair| format_time_range(&pair.open, &pair.close))
            .collect();
        if ranges.is_empty() {
            continue;
        }
        parts.push(format!("{}:{}", weekday_short(weekday), ranges.join(",")));
    }
    parts.join(" ")
}

// ── Detailed view ───────────────────────────────────────────────────────────

/// One day's hours in the detailed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
    pub is_closed: bool,
}

/// Per-weekday view of the raw records, for display-only collaborators.
///
/// Field order is the serialization order (`monday` .. `sunday`). Days
/// without a record keep the default empty hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailedOpeningHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl DetailedOpeningHours {
    /// The hours recorded for one weekday.
    pub fn day(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut DayHours {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// The English field name for a weekday key, mirroring serialization.
    pub fn key(weekday: Weekday) -> &'static str {
        weekday_english(weekday)
    }
}

/// Build the per-weekday view once from the raw records.
///
/// The first record for each day wins (split-session days keep their first
/// session in this view). A holiday record marks the day closed with empty
/// times. Times are stored canonicalized when they normalize, verbatim
/// otherwise.
pub fn organize_detailed_hours(entries: &[OpeningHours]) -> DetailedOpeningHours {
    let mut detailed = DetailedOpeningHours::default();
    let mut seen = [false; 7];

    for entry in entries {
        let weekday = match canonical_weekday(&entry.day) {
            Ok(weekday) => weekday,
            Err(_) => continue,
        };
        let index = weekday.num_days_from_monday() as usize;
        if seen[index] {
            continue;
        }
        seen[index] = true;

        let slot = detailed.day_mut(weekday);
        if entry.is_holiday {
            slot.is_closed = true;
        } else {
            slot.open = normalize_time(&entry.open).unwrap_or_else(|| entry.open.trim().to_string());
            slot.close =
                normalize_time(&entry.close).unwrap_or_else(|| entry.close.trim().to_string());
        }
    }

    detailed
}

// ── Tests ───────────────────────────────────────────────────────────────────
