/// Bengali digit glyphs indexed by their numeric value (U+09E6..=U+09EF)
pub const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// First Bengali digit glyph (zero)
pub(crate) const BENGALI_ZERO: char = '\u{09E6}';
/// Last Bengali digit glyph (nine)
pub(crate) const BENGALI_NINE: char = '\u{09EF}';

/// Earliest year accepted by the user-facing parse paths (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Latest year accepted by the user-facing parse paths (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Largest year writable with four digits; the calendar types stop here
pub const MAX_CALENDAR_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of any month
pub const MIN_DAY: u8 = 1;

/// Largest day count of any month, used for range-only checks
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of the localized DD/MM/YYYY form
pub const LOCALIZED_SEPARATOR: char = '/';
/// Separator of the canonical YYYY-MM-DD form
pub const ISO_SEPARATOR: char = '-';

/// Two-digit years below this pivot land in the 2000s, the rest in the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: u16 = 50;

/// Digit count of a date with all separators stripped (DDMMYYYY)
pub(crate) const COMPACT_DATE_LEN: usize = 8;
