mod consts;
mod convert;
mod numerals;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use convert::{
    bengali_date_to_iso, bengali_date_to_iso as convert_to_iso, current_bengali_date,
    format_date_to_bengali, format_date_to_bengali as convert_from_iso,
    format_naive_date_to_bengali, is_valid_bengali_date, parse_flexible_date,
};
pub use numerals::{is_bengali_digit, to_ascii_numerals, to_bengali_numerals};
pub use range::{BengaliDateRange, RangeError, compare_bengali_dates, filter_by_date_range};
pub use types::{Day, Month, Year, days_in_month, is_leap_year, is_valid_calendar_date};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A Gregorian calendar date rendered with Bengali numerals.
///
/// `Display` produces the localized `DD/MM/YYYY` form with Bengali digit
/// glyphs; [`BengaliDate::to_iso`] produces the canonical ASCII
/// `YYYY-MM-DD` interchange form. Ordering follows calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BengaliDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_CALENDAR_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year {} outside the accepted window ({}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfWindow(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Year {_0} cannot be written with four digits")]
    UnrepresentableYear(i32),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl BengaliDate {
    /// Creates a date from raw components, rejecting anything that is
    /// not a real Gregorian calendar day.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for a bad component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: types::Year::new(year)?,
            month: types::Month::new(month)?,
            day: types::Day::new(day, year, month)?,
        })
    }

    /// Returns the day of month (1-31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Canonical interchange form: zero-padded ASCII `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }

    /// Localized form: zero-padded `DD/MM/YYYY` in Bengali numerals.
    pub fn localized(&self) -> String {
        to_bengali_numerals(format!(
            "{:02}/{:02}/{:04}",
            self.day.get(),
            self.month.get(),
            self.year.get()
        ))
    }

    /// Permissive parse accepting either numeral system.
    ///
    /// Shapes tried in order: `/`- or `-`-separated day/month/year with
    /// exactly three parts, then a bare 8-digit DDMMYYYY block.
    /// Two-digit years pivot at 50 (`25` becomes 2025, `99` becomes
    /// 1999). The result must be a real calendar day inside the
    /// 1900..=2100 window.
    ///
    /// # Errors
    /// Returns `ParseError` on any structural, range, or calendar failure.
    pub fn parse_flexible(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let ascii = to_ascii_numerals(trimmed);

        let (day, month, year) =
            if ascii.contains(LOCALIZED_SEPARATOR) || ascii.contains(ISO_SEPARATOR) {
                let parts: Vec<&str> = ascii.split([LOCALIZED_SEPARATOR, ISO_SEPARATOR]).collect();
                if parts.len() != 3 {
                    return Err(ParseError::InvalidFormat(input.to_owned()));
                }
                (parse_u8(parts[0])?, parse_u8(parts[1])?, parse_u16(parts[2])?)
            } else if ascii.len() == COMPACT_DATE_LEN && ascii.bytes().all(|b| b.is_ascii_digit()) {
                (
                    parse_u8(&ascii[..2])?,
                    parse_u8(&ascii[2..4])?,
                    parse_u16(&ascii[4..])?,
                )
            } else {
                return Err(ParseError::InvalidFormat(input.to_owned()));
            };

        let year = normalize_two_digit_year(year);
        check_year_window(year)?;
        Self::new(year, month, day)
    }
}

impl FromStr for BengaliDate {
    type Err = ParseError;

    /// Strict localized parse: 1-2 Bengali digits, `/`, 1-2 Bengali
    /// digits, `/`, exactly 4 Bengali digits. ASCII digits and any other
    /// separator are rejected outright.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = s.split(LOCALIZED_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        let widths = [1..=2_usize, 1..=2, 4..=4];
        for (part, width) in parts.iter().zip(widths) {
            let glyphs = part.chars().count();
            if !width.contains(&glyphs) || !part.chars().all(is_bengali_digit) {
                return Err(ParseError::InvalidFormat(s.to_owned()));
            }
        }
        let day = parse_u8(&to_ascii_numerals(parts[0]))?;
        let month = parse_u8(&to_ascii_numerals(parts[1]))?;
        let year = parse_u16(&to_ascii_numerals(parts[2]))?;
        check_year_window(year)?;
        Self::new(year, month, day)
    }
}

impl fmt::Display for BengaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.localized())
    }
}

impl TryFrom<NaiveDate> for BengaliDate {
    type Error = ParseError;

    /// Native dates carry no year window; only years that cannot be
    /// written with four digits are refused.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .ok()
            .filter(|&y| y <= MAX_CALENDAR_YEAR)
            .ok_or(ParseError::UnrepresentableYear(date.year()))?;
        // chrono guarantees month and day are in range
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

impl serde::Serialize for BengaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BengaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- shared parse helpers ---

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

const fn normalize_two_digit_year(year: u16) -> u16 {
    if year < TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else if year < CENTURY_CYCLE {
        1900 + year
    } else {
        year
    }
}

fn check_year_window(year: u16) -> Result<(), ParseError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(ParseError::YearOutOfWindow(year))
    }
}
