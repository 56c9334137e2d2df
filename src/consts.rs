/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1900;
/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Years at or below this value are read as two-digit years
pub const LEGACY_YEAR_CUTOFF: u16 = 200;
/// Added to a two-digit year before validation
pub const LEGACY_YEAR_OFFSET: u16 = 1900;

/// Month value 0 is accepted and rolls back to December of the previous year
pub const MIN_MONTH: u8 = 0;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Day value 0 is accepted and rolls back to the last day of the previous month
pub const MIN_DAY: u8 = 0;
/// Upper bound on a day value, independent of the month
pub const MAX_DAY: u8 = 31;

/// Week 0 is the week before week 1
pub const MIN_WEEK: u8 = 0;
/// Weeks in a long ISO year
pub const MAX_WEEK: u8 = 53;
/// Weeks in a short ISO year
pub const SHORT_YEAR_WEEKS: u8 = 52;

/// Weekday value meaning "the whole week" rather than one day
pub const WHOLE_WEEK: u8 = 0;
/// ISO weekday number of Monday
pub const MONDAY: u8 = 1;
/// ISO weekday number of Sunday
pub const SUNDAY: u8 = 7;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;
/// First day of month, used when rewinding to the month start
pub const FIRST_OF_MONTH: u8 = 1;
/// 4 January always falls in ISO week 1
pub const WEEK_ONE_ANCHOR_DAY: u8 = 4;

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

/// Day count of a leap-day year
pub const LEAP_YEAR_DAYS: u32 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Hour of day (UTC) every date is pinned to
pub const CANONICAL_HOUR: u32 = 12;

/// First year covered by the year registry
pub const REGISTRY_FIRST_YEAR: u16 = 1900;
/// Year after the last one covered by the year registry
pub const REGISTRY_END_YEAR: u16 = 2100;

/// ISO years between 1900 and 2099 with 53 weeks.
///
/// A year is long when 1 January or 31 December falls on a Thursday.
/// Grouped by the 28-year repetition of the weekday pattern.
pub const LONG_YEARS_1900_TO_2099: [u16; 36] = [
    1903, 1931, 1959, 1987, //
    1908, 1936, 1964, 1992, //
    1914, 1942, 1970, 1998, //
    1920, 1948, 1976, //
    1925, 1953, 1981, //
    2004, 2032, 2060, 2088, //
    2009, 2037, 2065, 2093, //
    2015, 2043, 2071, 2099, //
    2020, 2048, 2076, //
    2026, 2054, 2082,
];

/// Lowercase weekday abbreviations, Sunday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Marks the week component in `YYYY-Www-D`
pub const WEEK_DESIGNATOR: char = 'W';
/// Marks the week component in the compact `YYYYwWW` form
pub const WHOLE_WEEK_DESIGNATOR: char = 'w';

/// Digits in each field of the text forms
pub const YEAR_DIGITS: usize = 4;
pub const MONTH_DIGITS: usize = 2;
pub const DAY_DIGITS: usize = 2;
pub const WEEK_DIGITS: usize = 2;
pub const WEEKDAY_DIGITS: usize = 1;
