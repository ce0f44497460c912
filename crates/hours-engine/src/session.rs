//! Session expansion and effective closing time.
//!
//! Some source rows encode "lunch + dinner" as one free-text `open` field
//! (`"11:00-14:00,17:00-21:00"`) instead of two records. Expansion turns a
//! record into one or more raw `{open, close}` pairs; the pairs stay as
//! strings so later stages can still see markers like `"(L.O)"` on the
//! close side.

use serde::Serialize;

use crate::record::OpeningHours;
use crate::time::parse_time;

/// Grace period granted after a close time carrying a last-order marker.
pub const LAST_ORDER_GRACE_MINUTES: u32 = 30;

/// Characters that signal a compound multi-session `open` field.
const RANGE_DELIMITERS: [char; 4] = ['-', ',', '~', '〜'];

/// Characters separating the open side of a session from its close side.
const SPAN_SEPARATORS: [char; 3] = ['-', '~', '〜'];

/// One raw open/close pair, prior to numeric conversion.
///
/// An empty pair marks a record whose compound field yielded nothing
/// parseable; callers treat it as unparseable and skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub open: String,
    pub close: String,
}

impl TimeRange {
    fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    fn empty() -> Self {
        Self::new("", "")
    }

    /// Whether either side is missing.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() || self.close.is_empty()
    }
}

/// Expand one record into its session pairs.
///
/// When the `open` field contains range-delimiter characters it is scanned
/// for every `time-time` sub-pattern (tolerant of `-`, `~`, `〜` spans and
/// comma-separated sessions) and the ordered list of pairs found is
/// returned; if the field has delimiters but no recognizable pair, a
/// single empty pair is returned. A plain record yields its `open`/`close`
/// fields verbatim as one pair.
pub fn expand_sessions(record: &OpeningHours) -> Vec<TimeRange> {
    if !record.open.contains(RANGE_DELIMITERS) {
        return vec![TimeRange::new(record.open.clone(), record.close.clone())];
    }

    let pairs: Vec<TimeRange> = record
        .open
        .split(',')
        .filter_map(split_span)
        .collect();

    if pairs.is_empty() {
        vec![TimeRange::empty()]
    } else {
        pairs
    }
}

/// Split one `time-time` segment into a pair, requiring both sides to be
/// recognizable time tokens.
fn split_span(segment: &str) -> Option<TimeRange> {
    let mut sides = segment.splitn(2, SPAN_SEPARATORS);
    let open = sides.next()?.trim();
    let close = sides.next()?.trim();
    if parse_time(open).is_err() || parse_time(close).is_err() {
        return None;
    }
    Some(TimeRange::new(open, close))
}

/// Whether a raw close string carries a last-order marker.
///
/// Case-insensitive: `"L.O"`, `"lo"`, or the spelled-out `"ラストオーダー"`.
pub fn has_last_order_marker(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    lowered.contains("l.o") || lowered.contains("lo") || raw.contains("ラストオーダー")
}

/// The closing time the engine actually compares against "now".
///
/// A last-order marker on the raw close string extends the stated close by
/// [`LAST_ORDER_GRACE_MINUTES`]: guests already seated remain served past
/// the stated time.
pub fn effective_close_minutes(close_minutes: u32, raw_close: &str) -> u32 {
    if has_last_order_marker(raw_close) {
        close_minutes + LAST_ORDER_GRACE_MINUTES
    } else {
        close_minutes
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_record_passes_through_verbatim() {
        let record = OpeningHours::new("月曜日", "11:00", "21:00(L.O)");
        let pairs = expand_sessions(&record);
        assert_eq!(pairs, vec![TimeRange::new("11:00", "21:00(L.O)")]);
    }

    #[test]
    fn test_lunch_and_dinner_in_one_field() {
        let record = OpeningHours::new("月曜日", "11:00-14:00,17:00-21:00", "");
        let pairs = expand_sessions(&record);
        assert_eq!(
            pairs,
            vec![
                TimeRange::new("11:00", "14:00"),
                TimeRange::new("17:00", "21:00"),
            ]
        );
    }

    #[test]
    fn test_wave_dash_span() {
        let record = OpeningHours::new("金曜日", "18:00〜23:00", "");
        let pairs = expand_sessions(&record);
        assert_eq!(pairs, vec![TimeRange::new("18:00", "23:00")]);
    }

    #[test]
    fn test_mixed_spellings_inside_compound_field() {
        let record = OpeningHours::new("土曜日", "11時30分~14時00分", "");
        let pairs = expand_sessions(&record);
        assert_eq!(pairs, vec![TimeRange::new("11時30分", "14時00分")]);
    }

    #[test]
    fn test_last_order_suffix_survives_expansion() {
        let record = OpeningHours::new("月曜日", "17:00-21:00(L.O)", "");
        let pairs = expand_sessions(&record);
        assert_eq!(pairs, vec![TimeRange::new("17:00", "21:00(L.O)")]);
    }

    #[test]
    fn test_delimiters_but_nothing_parseable() {
        let record = OpeningHours::new("月曜日", "営業-時間", "");
        let pairs = expand_sessions(&record);
        assert_eq!(pairs, vec![TimeRange::new("", "")]);
        assert!(pairs[0].is_empty());
    }

    #[test]
    fn test_partially_parseable_compound_keeps_good_pairs() {
        let record = OpeningHours::new("月曜日", "不明-何か,17:00-21:00", "");
        let pairs = expand_sessions(&record);
        assert_eq!(pairs, vec![TimeRange::new("17:00", "21:00")]);
    }

    // ── Last-order marker tests ─────────────────────────────────────────

    #[test]
    fn test_marker_dotted() {
        assert!(has_last_order_marker("21:00(L.O)"));
        assert!(has_last_order_marker("21:00(l.o.)"));
    }

    #[test]
    fn test_marker_bare() {
        assert!(has_last_order_marker("21:00 LO"));
    }

    #[test]
    fn test_marker_japanese() {
        assert!(has_last_order_marker("21:00 ラストオーダー"));
    }

    #[test]
    fn test_marker_absent() {
        assert!(!has_last_order_marker("21:00"));
    }

    #[test]
    fn test_effective_close_adds_grace() {
        assert_eq!(effective_close_minutes(1260, "21:00(L.O)"), 1290);
    }

    #[test]
    fn test_effective_close_unchanged_without_marker() {
        assert_eq!(effective_close_minutes(1260, "21:00"), 1260);
    }
}
