//! Weekday labels: normalization, alias resolution, and matching.
//!
//! The canonical join key for all day matching is the long-form Japanese
//! weekday name (`"月曜日"` .. `"日曜日"`). Source data also uses the short
//! Japanese form (`"月"`), the English full name, and the English
//! abbreviation; the alias table maps between all four spellings in both
//! directions, so a stored label in any supported spelling matches a query
//! in any other.

use chrono::Weekday;

use crate::error::{HoursError, Result};

/// All spellings of one weekday. The table is static and read-only.
struct DayNames {
    weekday: Weekday,
    /// Long-form Japanese — the canonical form.
    long: &'static str,
    /// Short Japanese form.
    short: &'static str,
    /// English full name (lower case).
    english: &'static str,
    /// English abbreviation (lower case).
    abbrev: &'static str,
}

#[rustfmt::skip]
static DAY_TABLE: [DayNames; 7] = [
    DayNames { weekday: Weekday::Mon, long: "月曜日", short: "月", english: "monday",    abbrev: "mon" },
    DayNames { weekday: Weekday::Tue, long: "火曜日", short: "火", english: "tuesday",   abbrev: "tue" },
    DayNames { weekday: Weekday::Wed, long: "水曜日", short: "水", english: "wednesday", abbrev: "wed" },
    DayNames { weekday: Weekday::Thu, long: "木曜日", short: "木", english: "thursday",  abbrev: "thu" },
    DayNames { weekday: Weekday::Fri, long: "金曜日", short: "金", english: "friday",    abbrev: "fri" },
    DayNames { weekday: Weekday::Sat, long: "土曜日", short: "土", english: "saturday",  abbrev: "sat" },
    DayNames { weekday: Weekday::Sun, long: "日曜日", short: "日", english: "sunday",    abbrev: "sun" },
];

/// Look up the table row for a day token in any spelling.
fn lookup(token: &str) -> Option<&'static DayNames> {
    let lowered = token.to_lowercase();
    DAY_TABLE.iter().find(|names| {
        names.long == token
            || names.short == token
            || names.english == lowered
            || names.abbrev == lowered
    })
}

/// Clean a raw day label: trim and drop embedded whitespace of any width.
fn clean_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '\u{200B}' | '\u{FEFF}'))
        .collect()
}

/// Look up the table row for an English day name or abbreviation only.
fn lookup_english(token: &str) -> Option<&'static DayNames> {
    let lowered = token.to_lowercase();
    DAY_TABLE
        .iter()
        .find(|names| names.english == lowered || names.abbrev == lowered)
}

/// Canonicalize a day label to the long-form Japanese name.
///
/// English full names and abbreviations (any case) map to the Japanese
/// long form; any other input — including the short Japanese form —
/// passes through cleaned but otherwise unchanged, on the assumption it
/// is already canonical Japanese. Short-form matching is the alias
/// resolver's job, not the normalizer's.
pub fn normalize_day_name(raw: &str) -> String {
    let cleaned = clean_label(raw);
    match lookup_english(&cleaned) {
        Some(names) => names.long.to_string(),
        None => cleaned,
    }
}

/// The full alias set for a day token: long form, short form, English full
/// name, English abbreviation. Works from any of the four spellings.
/// Unrecognized tokens have no aliases.
pub fn day_aliases(token: &str) -> &'static [&'static str] {
    match lookup(&clean_label(token)) {
        Some(names) => match names.weekday {
            Weekday::Mon => &["月曜日", "月", "monday", "mon"],
            Weekday::Tue => &["火曜日", "火", "tuesday", "tue"],
            Weekday::Wed => &["水曜日", "水", "wednesday", "wed"],
            Weekday::Thu => &["木曜日", "木", "thursday", "thu"],
            Weekday::Fri => &["金曜日", "金", "friday", "fri"],
            Weekday::Sat => &["土曜日", "土", "saturday", "sat"],
            Weekday::Sun => &["日曜日", "日", "sunday", "sun"],
        },
        None => &[],
    }
}

/// Whether two day labels refer to the same weekday.
///
/// True when the normalized forms are equal or either normalized form is
/// in the other's alias set. The relation is symmetric by construction:
/// the alias lookup works from any spelling.
pub fn days_match(a: &str, b: &str) -> bool {
    let na = normalize_day_name(a);
    let nb = normalize_day_name(b);
    na == nb || day_aliases(&na).contains(&nb.as_str())
}

/// Resolve a day label in any supported spelling to a [`Weekday`].
///
/// # Errors
///
/// Returns [`HoursError::UnknownDay`] for labels outside the supported
/// spellings.
pub fn canonical_weekday(raw: &str) -> Result<Weekday> {
    lookup(&clean_label(raw))
        .map(|names| names.weekday)
        .ok_or_else(|| HoursError::UnknownDay(raw.trim().to_string()))
}

/// The canonical long-form Japanese name for a weekday.
pub fn weekday_long(weekday: Weekday) -> &'static str {
    row(weekday).long
}

/// The short Japanese form for a weekday (weekly-summary rendering).
pub fn weekday_short(weekday: Weekday) -> &'static str {
    row(weekday).short
}

/// The lower-case English name for a weekday (detailed-hours map key).
pub fn weekday_english(weekday: Weekday) -> &'static str {
    row(weekday).english
}

/// Advance a weekday by `offset` days in enum space.
///
/// Pure weekday arithmetic — no timestamp addition, so there is nothing
/// for DST or timezone boundaries to distort. Negative offsets wrap
/// backwards.
pub fn weekday_offset(weekday: Weekday, offset: i64) -> Weekday {
    let base = weekday.num_days_from_monday() as i64;
    let index = (base + offset).rem_euclid(7) as usize;
    DAY_TABLE[index].weekday
}

fn row(weekday: Weekday) -> &'static DayNames {
    // The table covers all seven variants.
    DAY_TABLE
        .iter()
        .find(|names| names.weekday == weekday)
        .unwrap_or(&DAY_TABLE[0])
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_english_full_name() {
        assert_eq!(normalize_day_name("Monday"), "月曜日");
        assert_eq!(normalize_day_name("sunday"), "日曜日");
    }

    #[test]
    fn test_normalize_english_abbreviation() {
        assert_eq!(normalize_day_name("MON"), "月曜日");
        assert_eq!(normalize_day_name("sat"), "土曜日");
    }

    #[test]
    fn test_normalize_passes_through_japanese() {
        assert_eq!(normalize_day_name("月曜日"), "月曜日");
        assert_eq!(normalize_day_name("月"), "月");
    }

    #[test]
    fn test_normalize_keeps_short_japanese_form() {
        // Short forms are already-canonical Japanese to the normalizer;
        // only the alias resolver equates them with the long form.
        for (short, long) in [("月", "月曜日"), ("水", "水曜日"), ("日", "日曜日")] {
            assert_eq!(normalize_day_name(short), short);
            assert!(days_match(short, long), "{short} vs {long}");
        }
    }

    #[test]
    fn test_normalize_passes_through_unknown() {
        assert_eq!(normalize_day_name("祝日"), "祝日");
    }

    #[test]
    fn test_normalize_cleans_whitespace() {
        assert_eq!(normalize_day_name("　月曜日 "), "月曜日");
    }

    #[test]
    fn test_aliases_cover_all_spellings() {
        let aliases = day_aliases("水曜日");
        assert!(aliases.contains(&"水"));
        assert!(aliases.contains(&"wednesday"));
        assert!(aliases.contains(&"wed"));
    }

    #[test]
    fn test_aliases_work_from_any_spelling() {
        assert_eq!(day_aliases("金"), day_aliases("friday"));
        assert_eq!(day_aliases("fri"), day_aliases("金曜日"));
    }

    #[test]
    fn test_aliases_empty_for_unknown() {
        assert!(day_aliases("不定休").is_empty());
    }

    #[test]
    fn test_days_match_across_spellings() {
        assert!(days_match("月曜日", "monday"));
        assert!(days_match("月", "月曜日"));
        assert!(days_match("Tue", "火曜日"));
    }

    #[test]
    fn test_days_match_is_symmetric() {
        let labels = ["月曜日", "月", "monday", "Mon"];
        for a in labels {
            for b in labels {
                assert_eq!(days_match(a, b), days_match(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_days_match_rejects_different_days() {
        assert!(!days_match("月曜日", "火曜日"));
        assert!(!days_match("mon", "日"));
    }

    #[test]
    fn test_canonical_weekday() {
        assert!(matches!(canonical_weekday("土"), Ok(Weekday::Sat)));
        assert!(matches!(canonical_weekday("Thursday"), Ok(Weekday::Thu)));
        assert!(canonical_weekday("祝日").is_err());
    }

    #[test]
    fn test_weekday_offset_wraps_forward() {
        assert_eq!(weekday_offset(Weekday::Sat, 2), Weekday::Mon);
        assert_eq!(weekday_offset(Weekday::Mon, 7), Weekday::Mon);
    }

    #[test]
    fn test_weekday_offset_wraps_backward() {
        assert_eq!(weekday_offset(Weekday::Mon, -1), Weekday::Sun);
        assert_eq!(weekday_offset(Weekday::Wed, -10), Weekday::Sun);
    }
}
