use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, FIRST_OF_MONTH, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, LEGACY_YEAR_CUTOFF, LEGACY_YEAR_OFFSET, MAX_DAY, MAX_MONTH,
    MAX_WEEK, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_WEEK, MIN_YEAR, MONDAY, SUNDAY, WHOLE_WEEK,
};
use crate::error::{Component, WeekDateError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Applies the two-digit year shorthand: values up to `LEGACY_YEAR_CUTOFF`
/// have `LEGACY_YEAR_OFFSET` added.
#[inline]
pub const fn normalize_year(value: u16) -> u16 {
    if value <= LEGACY_YEAR_CUTOFF {
        value + LEGACY_YEAR_OFFSET
    } else {
        value
    }
}

fn check_range(component: Component, value: u8, min: u8, max: u8) -> Result<u8, WeekDateError> {
    if value < min || value > max {
        return Err(WeekDateError::out_of_range(
            component,
            u16::from(value),
            u16::from(min),
            u16::from(max),
        ));
    }
    Ok(value)
}

/// A year in `MIN_YEAR..=MAX_YEAR` (1900..=2100), after two-digit normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year. Values up to 200 are read as two-digit years.
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the normalized value is outside 1900..=2100.
    pub fn new(value: u16) -> Result<Self, WeekDateError> {
        let year = normalize_year(value);
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(WeekDateError::out_of_range(Component::Year, year, MIN_YEAR, MAX_YEAR));
        }
        Ok(Self(year))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether this Gregorian year has 366 days
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl TryFrom<u16> for Year {
    type Error = WeekDateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value in `0..=12`. Zero is accepted and rolls back to December of
/// the previous year once the date is projected onto the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the value is > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, WeekDateError> {
        check_range(Component::Month, value, MIN_MONTH, MAX_MONTH).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Month {
    type Error = WeekDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

/// A day value in `0..=31`.
///
/// Only the bound is checked, not the month length: 30 February is a valid
/// `Day`. It rolls over into March when the date is projected onto the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    /// The first day of a month.
    pub const FIRST: Self = Self(FIRST_OF_MONTH);

    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the value is > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, WeekDateError> {
        check_range(Component::Day, value, MIN_DAY, MAX_DAY).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Day {
    type Error = WeekDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

/// An ISO week number in `0..=53`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(u8);

impl Week {
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the value is > `MAX_WEEK`.
    pub fn new(value: u8) -> Result<Self, WeekDateError> {
        check_range(Component::Week, value, MIN_WEEK, MAX_WEEK).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Week {
    type Error = WeekDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// An ISO weekday number: 1 = Monday through 7 = Sunday, or
/// `WHOLE_WEEK` (0) for a value that stands for the entire week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// The whole-week sentinel.
    pub const WHOLE_WEEK: Self = Self(WHOLE_WEEK);
    pub const MONDAY: Self = Self(MONDAY);

    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the value is > 7.
    pub fn new(value: u8) -> Result<Self, WeekDateError> {
        check_range(Component::Weekday, value, WHOLE_WEEK, SUNDAY).map(Self)
    }

    /// Converts a `chrono::Weekday` to its ISO number.
    pub fn from_weekday(weekday: chrono::Weekday) -> Self {
        // number_from_monday is always 1..=7
        Self(weekday.number_from_monday() as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_whole_week(self) -> bool {
        self.0 == WHOLE_WEEK
    }

    /// The weekday this number names, or `None` for the whole-week sentinel.
    pub const fn weekday(self) -> Option<chrono::Weekday> {
        use chrono::Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};
        match self.0 {
            1 => Some(Mon),
            2 => Some(Tue),
            3 => Some(Wed),
            4 => Some(Thu),
            5 => Some(Fri),
            6 => Some(Sat),
            7 => Some(Sun),
            _ => None,
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = WeekDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

// Helper functions

/// Parses one fixed-width numeric field of a text form. `input` is the whole
/// text, reported back on failure.
pub(crate) fn parse_field<T: FromStr>(
    field: &str,
    width: usize,
    input: &str,
) -> Result<T, WeekDateError> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WeekDateError::InvalidFormat(format!(
            "{input}: expected {width} digits, found {field:?}"
        )));
    }
    field
        .parse::<T>()
        .map_err(|_| WeekDateError::InvalidFormat(input.to_owned()))
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in `month` of `year`, or 0 for a month outside 1..=12.
pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        JANUARY..=MAX_MONTH => DAYS_IN_MONTH[month as usize],
        _ => 0,
    }
}
