//! Date comparison and range filtering over localized date strings,
//! plus a typed inclusive range for callers that want errors instead of
//! sentinels.

use std::cmp::Ordering;

use serde_json::Value;

use crate::convert::{bengali_date_to_iso, format_date_to_bengali};
use crate::prelude::*;
use crate::{BengaliDate, ParseError};

/// An inclusive range between two localized dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start} - {end}")]
pub struct BengaliDateRange {
    start: BengaliDate,
    end: BengaliDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: BengaliDate,
        end: BengaliDate,
    },

    /// Error parsing a bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl BengaliDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: BengaliDate, end: BengaliDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from two strict localized date strings.
    ///
    /// # Errors
    /// Returns `RangeError` if either bound fails the strict parse or
    /// start > end.
    pub fn from_localized(start: &str, end: &str) -> Result<Self, RangeError> {
        let start = start.parse::<BengaliDate>()?;
        let end = end.parse::<BengaliDate>()?;
        Self::new(start, end)
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> BengaliDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> BengaliDate {
        self.end
    }

    /// Checks if the range contains a given date (inclusive bounds).
    pub fn contains(&self, date: &BengaliDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Compares two localized date strings by calendar order.
///
/// Both sides go through [`bengali_date_to_iso`]; zero-padded ISO text
/// orders exactly like the dates it names, so the comparison is
/// lexicographic. When either side fails to convert the result is
/// `Ordering::Equal` - invalid input is indistinguishable from equality
/// here, a long-standing policy this crate preserves (see DESIGN.md).
/// Callers needing a lossless order should compare [`BengaliDate`]
/// values instead.
pub fn compare_bengali_dates(a: &str, b: &str) -> Ordering {
    let iso_a = bengali_date_to_iso(a);
    let iso_b = bengali_date_to_iso(b);
    if iso_a.is_empty() || iso_b.is_empty() {
        return Ordering::Equal;
    }
    iso_a.cmp(&iso_b)
}

/// Filters an array of JSON records by an optional localized date range.
///
/// `start` and `end` are inclusive localized bounds; an empty string
/// means unbounded on that side. A record whose `date_field` is absent,
/// null, or empty is always retained; otherwise the field value is
/// localized with [`format_date_to_bengali`] and compared under
/// [`compare_bengali_dates`] semantics. Anything that is not a JSON
/// array yields an empty result.
pub fn filter_by_date_range(data: &Value, date_field: &str, start: &str, end: &str) -> Vec<Value> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| record_in_range(item, date_field, start, end))
        .cloned()
        .collect()
}

fn record_in_range(item: &Value, date_field: &str, start: &str, end: &str) -> bool {
    let Some(raw) = item.get(date_field).and_then(Value::as_str) else {
        return true;
    };
    if raw.is_empty() {
        return true;
    }
    let localized = format_date_to_bengali(raw);
    if !start.is_empty() && compare_bengali_dates(&localized, start) == Ordering::Less {
        return false;
    }
    if !end.is_empty() && compare_bengali_dates(&localized, end) == Ordering::Greater {
        return false;
    }
    true
}
