use std::{fmt, str::FromStr};

use chrono::Weekday;

use crate::{
    DATE_SEPARATOR, GregorianDate, WEEK_DESIGNATOR, WEEK_DIGITS, WEEKDAY_DIGITS,
    WHOLE_WEEK_DESIGNATOR, WeekDateError, YEAR_DIGITS, convert,
    types::{DayOfWeek, Week, Year, parse_field},
};

/// An ISO-8601 week date: week-numbering year, week and weekday.
///
/// The weekday may be the whole-week sentinel (0), in which case the value
/// stands for the entire week. Use [`weekday`](Self::weekday), which returns
/// `None` for such values, rather than reading the raw number as a day.
///
/// Field order gives the derived ordering: a whole-week value sorts just
/// before the Monday of the same week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeekDate {
    year: Year,
    week: Week,
    day:  DayOfWeek,
}

impl IsoWeekDate {
    /// Creates a week date. Years up to 200 are read as two-digit years.
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the normalized year is outside
    /// 1900..=2100, the week is above 53, or the day is above 7.
    pub fn new(year: u16, week: u8, day: u8) -> Result<Self, WeekDateError> {
        Ok(Self {
            year: Year::new(year)?,
            week: Week::new(week)?,
            day:  DayOfWeek::new(day)?,
        })
    }

    /// Creates a value that stands for the whole of `week`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn whole_week(year: u16, week: u8) -> Result<Self, WeekDateError> {
        Ok(Self {
            year: Year::new(year)?,
            week: Week::new(week)?,
            day:  DayOfWeek::WHOLE_WEEK,
        })
    }

    pub const fn from_parts(year: Year, week: Week, day: DayOfWeek) -> Self {
        Self { year, week, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn week(&self) -> u8 {
        self.week.get()
    }

    /// Raw weekday number, 0 for a whole-week value.
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn day_typed(&self) -> DayOfWeek {
        self.day
    }

    pub const fn is_whole_week(&self) -> bool {
        self.day.is_whole_week()
    }

    /// The weekday, or `None` for a whole-week value.
    pub const fn weekday(&self) -> Option<Weekday> {
        self.day.weekday()
    }

    /// The same week with the weekday dropped.
    pub const fn week_of(&self) -> Self {
        Self {
            year: self.year,
            week: self.week,
            day:  DayOfWeek::WHOLE_WEEK,
        }
    }

    /// The Monday of the same week.
    pub const fn monday(&self) -> Self {
        Self {
            year: self.year,
            week: self.week,
            day:  DayOfWeek::MONDAY,
        }
    }

    /// The Gregorian date of this week date; a whole-week value gives its Monday.
    ///
    /// # Errors
    /// See [`iso_to_gregorian`](crate::iso_to_gregorian).
    pub fn to_gregorian(&self) -> Result<GregorianDate, WeekDateError> {
        convert::iso_to_gregorian(self)
    }

    /// `YYYY-Www-D`
    fn parse_day_form(input: &str) -> Result<Self, WeekDateError> {
        let parts: Vec<&str> = input.split(DATE_SEPARATOR).collect();
        let [year, week, day] = parts.as_slice() else {
            return Err(WeekDateError::InvalidFormat(format!(
                "Expected YYYY-Www-D, found {input}"
            )));
        };
        let week = week
            .strip_prefix(WEEK_DESIGNATOR)
            .ok_or_else(|| WeekDateError::InvalidFormat(input.to_owned()))?;

        let date = Self::new(
            parse_field(year, YEAR_DIGITS, input)?,
            parse_field(week, WEEK_DIGITS, input)?,
            parse_field(day, WEEKDAY_DIGITS, input)?,
        )?;
        if date.is_whole_week() {
            return Err(WeekDateError::InvalidFormat(format!(
                "{input}: a whole week is written YYYYwWW"
            )));
        }
        Ok(date)
    }

    /// `YYYYwWW`
    fn parse_week_form(input: &str) -> Result<Self, WeekDateError> {
        let (year, week) = input
            .split_once(WHOLE_WEEK_DESIGNATOR)
            .ok_or_else(|| WeekDateError::InvalidFormat(input.to_owned()))?;
        Self::whole_week(
            parse_field(year, YEAR_DIGITS, input)?,
            parse_field(week, WEEK_DIGITS, input)?,
        )
    }
}

impl fmt::Display for IsoWeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole_week() {
            write!(f, "{}{WHOLE_WEEK_DESIGNATOR}{}", self.year, self.week)
        } else {
            write!(
                f,
                "{}{DATE_SEPARATOR}{WEEK_DESIGNATOR}{}{DATE_SEPARATOR}{}",
                self.year,
                self.week,
                self.day.get()
            )
        }
    }
}

impl FromStr for IsoWeekDate {
    type Err = WeekDateError;

    /// Parses `YYYY-Www-D` or the whole-week form `YYYYwWW`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WeekDateError::InvalidFormat("Empty date string".to_owned()));
        }

        let has_day_form = trimmed.contains(WEEK_DESIGNATOR);
        let has_week_form = trimmed.contains(WHOLE_WEEK_DESIGNATOR);
        match (has_day_form, has_week_form) {
            (true, false) => Self::parse_day_form(trimmed),
            (false, true) => Self::parse_week_form(trimmed),
            _ => Err(WeekDateError::InvalidFormat(format!(
                "Expected YYYY-Www-D or YYYYwWW, found {trimmed}"
            ))),
        }
    }
}

impl serde::Serialize for IsoWeekDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IsoWeekDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
