//! Digit transliteration between ASCII and Bengali numerals.
//!
//! These are character-for-character substitutions, not numeric
//! conversions: non-digit characters pass through untouched, so both
//! directions are total and idempotent.

use std::fmt::Display;

use crate::consts::{BENGALI_DIGITS, BENGALI_NINE, BENGALI_ZERO};

/// Returns true if `c` is one of the ten Bengali digit glyphs.
pub const fn is_bengali_digit(c: char) -> bool {
    BENGALI_ZERO <= c && c <= BENGALI_NINE
}

/// Replaces every ASCII digit with its Bengali glyph.
///
/// Accepts anything displayable, covering both string and numeric input.
/// Characters that are not ASCII digits (including Bengali digits) are
/// kept as-is.
pub fn to_bengali_numerals<T: Display>(input: T) -> String {
    input
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => BENGALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Replaces every Bengali digit glyph with its ASCII digit.
///
/// Characters that are not Bengali digits (including ASCII digits) are
/// kept as-is.
pub fn to_ascii_numerals(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if is_bengali_digit(c) {
                // Bengali digits are a contiguous Unicode block, so the
                // offset from zero is the digit value.
                let value = c as u32 - BENGALI_ZERO as u32;
                char::from_digit(value, 10).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
