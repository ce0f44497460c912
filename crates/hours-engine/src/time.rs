//! Time-token recognition and conversion.
//!
//! Source data writes clock times in many spellings: `"11:30"`,
//! `"11時30分"`, `"11：30"` (full-width colon), `"11.30"`, `"11h30"`, bare
//! digit runs like `"1130"`, full-width digits, stray whitespace. Each
//! tolerated spelling is one [`ParsedTime`] variant with its own matcher;
//! the matchers are tried in a fixed order and the first success wins, so
//! the set of accepted formats stays explicit and exhaustible.
//!
//! Two conversions sit on top of the shared matcher chain:
//!
//! - [`normalize_time`] — canonical zero-padded `"HH:MM"`, clock range only
//! - [`time_to_minutes`] — minutes since midnight, also accepting the
//!   extended-hour notation (`"25:30"`) used for sessions that run into the
//!   next day
//!
//! Neither conversion panics or errors for any input; an unrecognizable
//! token is simply `None`, which callers treat as "skip this session".

use crate::error::{HoursError, Result};

/// Upper bound of a same-day clock hour. `"24:00"` is accepted as the
/// end-of-day sentinel.
const MAX_CLOCK_HOUR: u32 = 24;

/// Upper bound of the extended-hour notation (`"29:59"` = 05:59 next day).
const MAX_EXTENDED_HOUR: u32 = 29;

/// Minutes value representing end of day / explicit 24-hour close.
pub const END_OF_DAY_MINUTES: u32 = 1440;

// ── ParsedTime ──────────────────────────────────────────────────────────────

/// A time token recognized by one of the candidate matchers.
///
/// The variant records which spelling matched; the payload is always the
/// raw `(hour, minute)` pair before any range validation, so the same
/// parse feeds both the strict clock normalizer and the extended-hour
/// minutes converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// ASCII colon: `"11:30"`.
    Colon { hour: u32, minute: u32 },
    /// Kanji markers: `"11時30分"` or `"11時30"`.
    Kanji { hour: u32, minute: u32 },
    /// Full-width colon: `"11：30"`.
    FullWidthColon { hour: u32, minute: u32 },
    /// Dot separator: `"11.30"`.
    Dot { hour: u32, minute: u32 },
    /// Hour marker: `"11h30"`.
    HourMarker { hour: u32, minute: u32 },
    /// Bare 3-4 digit run: `"1130"`, `"930"`.
    Compact { hour: u32, minute: u32 },
}

impl ParsedTime {
    /// The hour component, unvalidated.
    pub fn hour(&self) -> u32 {
        match *self {
            ParsedTime::Colon { hour, .. }
            | ParsedTime::Kanji { hour, .. }
            | ParsedTime::FullWidthColon { hour, .. }
            | ParsedTime::Dot { hour, .. }
            | ParsedTime::HourMarker { hour, .. }
            | ParsedTime::Compact { hour, .. } => hour,
        }
    }

    /// The minute component, unvalidated.
    pub fn minute(&self) -> u32 {
        match *self {
            ParsedTime::Colon { minute, .. }
            | ParsedTime::Kanji { minute, .. }
            | ParsedTime::FullWidthColon { minute, .. }
            | ParsedTime::Dot { minute, .. }
            | ParsedTime::HourMarker { minute, .. }
            | ParsedTime::Compact { minute, .. } => minute,
        }
    }

    /// Zero-padded `"HH:MM"` rendering of the raw components.
    pub fn canonical(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── Public conversions ──────────────────────────────────────────────────────

/// Recognize a time token in any supported spelling.
///
/// Cleans the token (whitespace of every width removed, full-width digits
/// folded to ASCII) and runs the candidate matchers in order of
/// specificity. Matchers locate the first occurrence of their pattern
/// anywhere in the token, so suffixes such as `"(L.O)"` do not defeat
/// recognition of the time itself.
///
/// # Errors
///
/// Returns [`HoursError::UnparseableTime`] when no matcher fires. The
/// higher-level conversions map this to `None`; the error form exists for
/// collaborators (ingestion, diagnostics) that want the reason.
pub fn parse_time(raw: &str) -> Result<ParsedTime> {
    let token = clean_token(raw);

    match_colon(&token)
        .or_else(|| match_kanji(&token))
        .or_else(|| match_full_width_colon(&token))
        .or_else(|| match_dot(&token))
        .or_else(|| match_hour_marker(&token))
        .or_else(|| match_compact(&token))
        .ok_or_else(|| HoursError::UnparseableTime(raw.trim().to_string()))
}

/// Normalize a raw time token to canonical zero-padded `"HH:MM"`.
///
/// Accepts clock-range values only: hour 0-23 with minute 0-59, plus the
/// literal end-of-day `"24:00"`. Anything else — including the
/// extended-hour notation — is `None`.
pub fn normalize_time(raw: &str) -> Option<String> {
    let parsed = parse_time(raw).ok()?;
    let (hour, minute) = (parsed.hour(), parsed.minute());
    if minute > 59 || hour > MAX_CLOCK_HOUR || (hour == MAX_CLOCK_HOUR && minute != 0) {
        return None;
    }
    Some(parsed.canonical())
}

/// Convert a raw time token to minutes since midnight.
///
/// `"24:00"` maps to 1440. Extended hours 24-29 map past 1440 — a session
/// documented as starting "tomorrow" relative to midnight, e.g. `"25:30"`
/// is 1530. Hour outside 0-29 or minute outside 0-59 is `None`; this
/// function never panics and is total over arbitrary strings.
pub fn time_to_minutes(raw: &str) -> Option<u32> {
    let parsed = parse_time(raw).ok()?;
    let (hour, minute) = (parsed.hour(), parsed.minute());
    if hour > MAX_EXTENDED_HOUR || minute > 59 {
        return None;
    }
    if hour >= MAX_CLOCK_HOUR {
        Some((hour - MAX_CLOCK_HOUR) * 60 + minute + END_OF_DAY_MINUTES)
    } else {
        Some(hour * 60 + minute)
    }
}

// ── Token cleaning ──────────────────────────────────────────────────────────

/// Strip whitespace of every width and fold full-width digits to ASCII.
fn clean_token(raw: &str) -> Vec<char> {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '\u{200B}' | '\u{FEFF}'))
        .map(fold_digit)
        .collect()
}

/// Map full-width digits (U+FF10..U+FF19) to their ASCII counterparts.
fn fold_digit(c: char) -> char {
    if ('０'..='９').contains(&c) {
        char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c)
    } else {
        c
    }
}

// ── Candidate matchers ──────────────────────────────────────────────────────

/// `"HH:MM"` with an ASCII colon.
fn match_colon(token: &[char]) -> Option<ParsedTime> {
    let (hour, minute) = match_separated(token, ':', 2)?;
    Some(ParsedTime::Colon { hour, minute })
}

/// `"HH時MM分"` or `"HH時MM"`. Single-digit minutes (`"11時5分"`) are
/// accepted; the trailing `分` is incidental to the match.
fn match_kanji(token: &[char]) -> Option<ParsedTime> {
    let (hour, minute) = match_separated(token, '時', 1)?;
    Some(ParsedTime::Kanji { hour, minute })
}

/// `"HH：MM"` with a full-width colon.
fn match_full_width_colon(token: &[char]) -> Option<ParsedTime> {
    let (hour, minute) = match_separated(token, '：', 2)?;
    Some(ParsedTime::FullWidthColon { hour, minute })
}

/// `"HH.MM"`.
fn match_dot(token: &[char]) -> Option<ParsedTime> {
    let (hour, minute) = match_separated(token, '.', 2)?;
    Some(ParsedTime::Dot { hour, minute })
}

/// `"HHhMM"` (also accepts an upper-case `H`).
fn match_hour_marker(token: &[char]) -> Option<ParsedTime> {
    let (hour, minute) = match_separated(token, 'h', 2)
        .or_else(|| match_separated(token, 'H', 2))?;
    Some(ParsedTime::HourMarker { hour, minute })
}

/// A bare run of exactly 3 or 4 digits read as `HMM` / `HHMM`.
fn match_compact(token: &[char]) -> Option<ParsedTime> {
    let mut i = 0;
    while i < token.len() {
        if !token[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < token.len() && token[i].is_ascii_digit() {
            i += 1;
        }
        let run = &token[start..i];
        match run.len() {
            3 => {
                let hour = digit_value(run[0]);
                let minute = digit_value(run[1]) * 10 + digit_value(run[2]);
                return Some(ParsedTime::Compact { hour, minute });
            }
            4 => {
                let hour = digit_value(run[0]) * 10 + digit_value(run[1]);
                let minute = digit_value(run[2]) * 10 + digit_value(run[3]);
                return Some(ParsedTime::Compact { hour, minute });
            }
            _ => {}
        }
    }
    None
}

/// Find the first `sep` with 1-2 digits immediately before it and
/// `min_minute_digits`-2 digits immediately after it.
fn match_separated(token: &[char], sep: char, min_minute_digits: usize) -> Option<(u32, u32)> {
    for (i, &c) in token.iter().enumerate() {
        if c != sep {
            continue;
        }
        let hour = match trailing_number(&token[..i]) {
            Some(h) => h,
            None => continue,
        };
        let minute = match leading_number(&token[i + 1..], min_minute_digits) {
            Some(m) => m,
            None => continue,
        };
        return Some((hour, minute));
    }
    None
}

/// Read a 1-2 digit number ending exactly at the end of `slice`.
fn trailing_number(slice: &[char]) -> Option<u32> {
    let last = *slice.last()?;
    if !last.is_ascii_digit() {
        return None;
    }
    let mut value = digit_value(last);
    if slice.len() >= 2 {
        let prev = slice[slice.len() - 2];
        if prev.is_ascii_digit() {
            value += digit_value(prev) * 10;
        }
    }
    Some(value)
}

/// Read a number of `min`-2 digits starting exactly at the start of `slice`.
fn leading_number(slice: &[char], min: usize) -> Option<u32> {
    let first = *slice.first()?;
    if !first.is_ascii_digit() {
        return None;
    }
    let mut value = digit_value(first);
    let mut len = 1;
    if let Some(&second) = slice.get(1) {
        if second.is_ascii_digit() {
            value = value * 10 + digit_value(second);
            len = 2;
        }
    }
    if len < min {
        return None;
    }
    Some(value)
}

fn digit_value(c: char) -> u32 {
    c.to_digit(10).unwrap_or(0)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── normalize_time tests ────────────────────────────────────────────

    #[test]
    fn test_normalize_ascii_colon() {
        assert_eq!(normalize_time("11:30").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_zero_pads() {
        assert_eq!(normalize_time("9:05").as_deref(), Some("09:05"));
    }

    #[test]
    fn test_normalize_kanji_with_fun() {
        assert_eq!(normalize_time("11時30分").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_kanji_without_fun() {
        assert_eq!(normalize_time("18時30").as_deref(), Some("18:30"));
    }

    #[test]
    fn test_normalize_kanji_single_digit_minute() {
        assert_eq!(normalize_time("11時5分").as_deref(), Some("11:05"));
    }

    #[test]
    fn test_normalize_full_width_colon() {
        assert_eq!(normalize_time("11：30").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_full_width_digits() {
        assert_eq!(normalize_time("１１：３０").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_dot() {
        assert_eq!(normalize_time("11.30").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_hour_marker() {
        assert_eq!(normalize_time("11h30").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_compact_four_digits() {
        assert_eq!(normalize_time("1130").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_compact_three_digits() {
        assert_eq!(normalize_time("930").as_deref(), Some("09:30"));
    }

    #[test]
    fn test_normalize_strips_exotic_whitespace() {
        assert_eq!(normalize_time("　11 : 30\u{200B}").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_normalize_with_last_order_suffix() {
        assert_eq!(normalize_time("21:00(L.O)").as_deref(), Some("21:00"));
    }

    #[test]
    fn test_normalize_end_of_day_sentinel() {
        assert_eq!(normalize_time("24:00").as_deref(), Some("24:00"));
    }

    #[test]
    fn test_normalize_rejects_extended_hour() {
        assert_eq!(normalize_time("25:30"), None);
    }

    #[test]
    fn test_normalize_rejects_bad_minute() {
        assert_eq!(normalize_time("11:75"), None);
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(normalize_time("定休日"), None);
        assert_eq!(normalize_time(""), None);
    }

    #[test]
    fn test_matcher_order_colon_beats_compact() {
        // "21:00(L.O.2130)" — the colon matcher must win over the bare run.
        assert_eq!(normalize_time("21:00(L.O.2130)").as_deref(), Some("21:00"));
    }

    // ── time_to_minutes tests ───────────────────────────────────────────

    #[test]
    fn test_minutes_plain() {
        assert_eq!(time_to_minutes("11:30"), Some(690));
    }

    #[test]
    fn test_minutes_midnight() {
        assert_eq!(time_to_minutes("00:00"), Some(0));
    }

    #[test]
    fn test_minutes_end_of_day() {
        assert_eq!(time_to_minutes("24:00"), Some(1440));
    }

    #[test]
    fn test_minutes_extended_hour() {
        // 25:30 = 01:30 next day = 90 + 1440
        assert_eq!(time_to_minutes("25:30"), Some(1530));
    }

    #[test]
    fn test_minutes_extended_hour_upper_bound() {
        assert_eq!(time_to_minutes("29:59"), Some(1799));
        assert_eq!(time_to_minutes("30:00"), None);
    }

    #[test]
    fn test_minutes_rejects_bad_minute() {
        assert_eq!(time_to_minutes("25:75"), None);
    }

    #[test]
    fn test_minutes_unparseable_is_none() {
        assert_eq!(time_to_minutes("不定休"), None);
    }

    // ── ParsedTime tagging tests ────────────────────────────────────────

    #[test]
    fn test_parse_tags_spelling() {
        assert!(matches!(parse_time("11:30"), Ok(ParsedTime::Colon { .. })));
        assert!(matches!(parse_time("11時30分"), Ok(ParsedTime::Kanji { .. })));
        assert!(matches!(
            parse_time("11：30"),
            Ok(ParsedTime::FullWidthColon { .. })
        ));
        assert!(matches!(parse_time("11.30"), Ok(ParsedTime::Dot { .. })));
        assert!(matches!(
            parse_time("11h30"),
            Ok(ParsedTime::HourMarker { .. })
        ));
        assert!(matches!(
            parse_time("1130"),
            Ok(ParsedTime::Compact { .. })
        ));
    }

    #[test]
    fn test_parse_error_carries_token() {
        let err = parse_time("定休日").unwrap_err();
        assert!(err.to_string().contains("定休日"), "got: {err}");
    }

    #[test]
    fn test_equivalent_spellings_agree() {
        for raw in ["11時30分", "11：30", "1130", "11.30", "11h30"] {
            assert_eq!(normalize_time(raw).as_deref(), Some("11:30"), "raw: {raw}");
        }
    }

    // ── Property tests ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_normalize_idempotent(hour in 0u32..24, minute in 0u32..60) {
            let canonical = format!("{hour:02}:{minute:02}");
            prop_assert_eq!(normalize_time(&canonical), Some(canonical));
        }

        #[test]
        fn prop_total_over_arbitrary_input(raw in "\\PC*") {
            // Must never panic, whatever the input.
            let _ = normalize_time(&raw);
            let _ = time_to_minutes(&raw);
        }

        #[test]
        fn prop_minutes_consistent_with_normalize(hour in 0u32..24, minute in 0u32..60) {
            let canonical = format!("{hour:02}:{minute:02}");
            prop_assert_eq!(time_to_minutes(&canonical), Some(hour * 60 + minute));
        }
    }
}
