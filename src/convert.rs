//! Sentinel-valued conversion surface used by form code.
//!
//! These functions keep the fail-soft contract expected by input
//! widgets: they never panic and never surface an error type. Failures
//! come back as `""`, `None`, or `false`, and callers that need to know
//! why can go through [`BengaliDate`] instead.

use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::BengaliDate;
use crate::consts::{
    COMPACT_DATE_LEN, ISO_SEPARATOR, LOCALIZED_SEPARATOR, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY,
    MIN_YEAR,
};
use crate::numerals::to_ascii_numerals;

/// True iff `input` is a strict localized date: Bengali digits in
/// `DD/MM/YYYY` shape, naming a real calendar day in 1900..=2100.
pub fn is_valid_bengali_date(input: &str) -> bool {
    input.parse::<BengaliDate>().is_ok()
}

/// Converts a localized date string to canonical `YYYY-MM-DD`, or `""`.
///
/// Accepts either numeral system and tolerates `/` or `-` separators;
/// after stripping them, exactly 8 digits are read as DDMMYYYY. Only
/// numeric ranges are checked (day 1-31, month 1-12, year 1900-2100):
/// unlike [`is_valid_bengali_date`] there is no calendar validation, so
/// combinations like 30/02 still convert. That asymmetry is kept on
/// purpose; see DESIGN.md.
pub fn bengali_date_to_iso(input: &str) -> String {
    iso_from_localized(input).unwrap_or_default()
}

fn iso_from_localized(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let digits: String = to_ascii_numerals(input)
        .chars()
        .filter(|&c| c != LOCALIZED_SEPARATOR && c != ISO_SEPARATOR)
        .collect();
    if digits.len() != COMPACT_DATE_LEN || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u8 = digits[..2].parse().ok()?;
    let month: u8 = digits[2..4].parse().ok()?;
    let year: u16 = digits[4..].parse().ok()?;
    if !(MIN_DAY..=MAX_DAY).contains(&day)
        || !(1..=MAX_MONTH).contains(&month)
        || !(MIN_YEAR..=MAX_YEAR).contains(&year)
    {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Permissive parse to canonical ISO text.
///
/// Thin wrapper over [`BengaliDate::parse_flexible`]; returns `None`
/// instead of an error.
pub fn parse_flexible_date(input: &str) -> Option<String> {
    BengaliDate::parse_flexible(input).ok().map(|d| d.to_iso())
}

/// Formats a textual date into localized `DD/MM/YYYY`, or `""`.
///
/// Dash-separated input goes through chrono's ISO parse. Slash-separated
/// input with exactly three parts is disambiguated by value: when the
/// first number could be a month and the second cannot, it is read
/// month-first (`02/13/2025`), otherwise day-first (`13/02/2025`).
/// A triple that is not a real calendar day yields `""`.
pub fn format_date_to_bengali(input: &str) -> String {
    localized_from_text(input).unwrap_or_default()
}

fn localized_from_text(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    if input.contains(ISO_SEPARATOR) {
        let date = NaiveDate::from_str(input).ok()?;
        return BengaliDate::try_from(date).ok().map(|d| d.to_string());
    }
    if input.contains(LOCALIZED_SEPARATOR) {
        let ascii = to_ascii_numerals(input);
        let parts: Vec<&str> = ascii.split(LOCALIZED_SEPARATOR).collect();
        if parts.len() != 3 {
            return None;
        }
        let first: u16 = parts[0].trim().parse().ok()?;
        let second: u16 = parts[1].trim().parse().ok()?;
        let year: u16 = parts[2].trim().parse().ok()?;
        let month_limit = u16::from(MAX_MONTH);
        let (day, month) = if first <= month_limit && second > month_limit {
            (second, first)
        } else {
            (first, second)
        };
        let date =
            BengaliDate::new(year, u8::try_from(month).ok()?, u8::try_from(day).ok()?).ok()?;
        return Some(date.to_string());
    }
    // No recognized separator: defer to the platform parse.
    NaiveDate::from_str(input)
        .ok()
        .and_then(|date| BengaliDate::try_from(date).ok())
        .map(|d| d.to_string())
}

/// Formats a native date value into localized `DD/MM/YYYY`.
///
/// The 1900..=2100 parse window does not apply here; only years that
/// cannot be written with four digits yield `""`.
pub fn format_naive_date_to_bengali(date: NaiveDate) -> String {
    BengaliDate::try_from(date)
        .map(|d| d.to_string())
        .unwrap_or_default()
}

/// Today's local date in localized form.
pub fn current_bengali_date() -> String {
    format_naive_date_to_bengali(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerals::to_bengali_numerals;

    #[test]
    fn test_is_valid_bengali_date() {
        assert!(is_valid_bengali_date("০৭/০৭/২০২৫"));
        assert!(is_valid_bengali_date("২৯/০২/২০২৪")); // leap day

        assert!(!is_valid_bengali_date("07/07/2025")); // ASCII digits
        assert!(!is_valid_bengali_date("২৯/০২/২০২৩")); // no leap day
        assert!(!is_valid_bengali_date("৩০/০২/২০২৫")); // Feb 30
        assert!(!is_valid_bengali_date("৩২/০১/২০২৫")); // day 32
        assert!(!is_valid_bengali_date("০০/০১/২০২৫")); // day 0
        assert!(!is_valid_bengali_date("০১/১৩/২০২৫")); // month 13
        assert!(!is_valid_bengali_date("০১/০০/২০২৫")); // month 0
        assert!(!is_valid_bengali_date("০১/০১/১৮৯৯")); // below window
        assert!(!is_valid_bengali_date("০১/০১/২১০১")); // above window
        assert!(!is_valid_bengali_date(""));
    }

    #[test]
    fn test_bengali_date_to_iso() {
        assert_eq!(bengali_date_to_iso("০৭/০৭/২০২৫"), "2025-07-07");
        assert_eq!(bengali_date_to_iso("৩১/১২/২১০০"), "2100-12-31");

        // ASCII and dash-separated digits are tolerated here
        assert_eq!(bengali_date_to_iso("07/07/2025"), "2025-07-07");
        assert_eq!(bengali_date_to_iso("07-07-2025"), "2025-07-07");
        assert_eq!(bengali_date_to_iso("07072025"), "2025-07-07");
    }

    #[test]
    fn test_bengali_date_to_iso_failures() {
        assert_eq!(bengali_date_to_iso(""), "");
        assert_eq!(bengali_date_to_iso("৩২/১৩/২০২৫"), ""); // day 32, month 13
        assert_eq!(bengali_date_to_iso("০৭/০৭/২৫"), ""); // six digits
        assert_eq!(bengali_date_to_iso("০৭/০৭/১৮৯৯"), ""); // below window
        assert_eq!(bengali_date_to_iso("০৭/০৭/২১০১"), ""); // above window
        assert_eq!(bengali_date_to_iso("hello"), "");
    }

    #[test]
    fn test_bengali_date_to_iso_skips_calendar_validation() {
        // Feb 30 passes the range-only checks here even though the
        // strict validator rejects it. Long-standing asymmetry, kept.
        assert_eq!(bengali_date_to_iso("৩০/০২/২০২৫"), "2025-02-30");
        assert!(!is_valid_bengali_date("৩০/০২/২০২৫"));
    }

    #[test]
    fn test_parse_flexible_date() {
        assert_eq!(
            parse_flexible_date("07/07/25").as_deref(),
            Some("2025-07-07")
        );
        assert_eq!(
            parse_flexible_date("07/07/99").as_deref(),
            Some("1999-07-07")
        );
        assert_eq!(
            parse_flexible_date("০৭/০৭/২০২৫").as_deref(),
            Some("2025-07-07")
        );
        assert_eq!(parse_flexible_date("30/02/2025"), None);
        assert_eq!(parse_flexible_date(""), None);
    }

    #[test]
    fn test_format_date_to_bengali_iso() {
        assert_eq!(format_date_to_bengali("2025-07-07"), "০৭/০৭/২০২৫");
        assert_eq!(format_date_to_bengali("1999-12-31"), "৩১/১২/১৯৯৯");
    }

    #[test]
    fn test_format_date_to_bengali_disambiguation() {
        // first > 12: must be the day
        assert_eq!(format_date_to_bengali("13/02/2025"), "১৩/০২/২০২৫");
        // first fits a month, second cannot: month-first
        assert_eq!(format_date_to_bengali("02/13/2025"), "১৩/০২/২০২৫");
        // both fit a month: day-first wins
        assert_eq!(format_date_to_bengali("02/03/2025"), "০২/০৩/২০২৫");
    }

    #[test]
    fn test_format_date_to_bengali_localized_passthrough() {
        assert_eq!(format_date_to_bengali("০৭/০৭/২০২৫"), "০৭/০৭/২০২৫");
    }

    #[test]
    fn test_format_date_to_bengali_failures() {
        assert_eq!(format_date_to_bengali(""), "");
        assert_eq!(format_date_to_bengali("30/02/2025"), ""); // Feb 30
        assert_eq!(format_date_to_bengali("07/2025"), ""); // two parts
        assert_eq!(format_date_to_bengali("not a date"), "");
        assert_eq!(format_date_to_bengali("2025-02-30"), ""); // chrono rejects
    }

    #[test]
    fn test_format_naive_date_to_bengali() {
        let native = NaiveDate::from_ymd_opt(2025, 7, 7).unwrap();
        assert_eq!(format_naive_date_to_bengali(native), "০৭/০৭/২০২৫");

        // outside the parse window but still formattable
        let old = NaiveDate::from_ymd_opt(1848, 3, 1).unwrap();
        assert_eq!(format_naive_date_to_bengali(old), "০১/০৩/১৮৪৮");
    }

    #[test]
    fn test_current_bengali_date_shape() {
        let today = current_bengali_date();
        // DD/MM/YYYY: ten glyphs, slashes at fixed positions
        let glyphs: Vec<char> = today.chars().collect();
        assert_eq!(glyphs.len(), 10);
        assert_eq!(glyphs[2], '/');
        assert_eq!(glyphs[5], '/');
        assert!(is_valid_bengali_date(&today));
    }

    #[test]
    fn test_round_trip_localized_iso() {
        for iso in ["1900-01-01", "2024-02-29", "2025-07-07", "2100-12-31"] {
            let localized = format_date_to_bengali(iso);
            assert_eq!(bengali_date_to_iso(&localized), iso);
        }
    }

    #[test]
    fn test_round_trip_matches_transliteration() {
        let localized = format_date_to_bengali("2025-07-07");
        assert_eq!(localized, to_bengali_numerals("07/07/2025"));
    }
}
