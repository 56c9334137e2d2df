use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::{
    CANONICAL_HOUR, DATE_SEPARATOR, DAY_DIGITS, IsoWeekDate, MONTH_DIGITS, WEEKDAY_ABBREVIATIONS,
    WeekDateError, YEAR_DIGITS, convert,
    error::Component,
    types::{Day, Month, Year, days_in_month, parse_field},
};

/// A Gregorian calendar date between 1900 and 2100, pinned to 12:00 UTC.
///
/// Construction checks each component against its bound only, so a value
/// such as 30 February is representable. Whenever the date is placed on the
/// real calendar (weekday, ISO conversion, [`to_datetime`](Self::to_datetime))
/// out-of-month days roll over: day 0 is the last day of the previous month,
/// day 30 of February is 1 or 2 March, and month 0 is December of the
/// previous year. The text form shows the rolled-over day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a date from numeric components. Years up to 200 are read as
    /// two-digit years (`57` is 1957).
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the normalized year is outside
    /// 1900..=2100, the month is above 12, or the day is above 31.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, WeekDateError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day)?,
        })
    }

    /// Creates a date from already validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since 1970-01-01, after rolling over out-of-month components.
    pub const fn day_number(&self) -> i64 {
        convert::days_from_civil(self.year.get() as i64, self.month.get(), self.day.get())
    }

    /// Whether the stored components name a real calendar day without rollover.
    pub const fn is_calendar_day(&self) -> bool {
        let (month, day) = (self.month.get(), self.day.get());
        month != 0 && day != 0 && day <= days_in_month(self.year.get(), month)
    }

    /// The rolled-over calendar day this value denotes.
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the rollover leaves 1900..=2100.
    pub fn normalized(&self) -> Result<Self, WeekDateError> {
        convert::date_from_day_number(self.day_number())
    }

    /// The first day of this date's month.
    pub const fn first_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   Day::FIRST,
        }
    }

    pub fn weekday(&self) -> Weekday {
        convert::weekday_from_day_number(self.day_number())
    }

    /// Lowercase three-letter English weekday name.
    pub fn weekday_abbreviation(&self) -> &'static str {
        WEEKDAY_ABBREVIATIONS[self.weekday().num_days_from_sunday() as usize]
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The canonical instant of this date: 12:00:00 UTC. Any zone within
    /// twelve hours of UTC still sees the same calendar day.
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if the rolled-over date leaves 1900..=2100.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, WeekDateError> {
        let date = self.normalized()?;
        NaiveDate::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .and_then(|naive| naive.and_hms_opt(CANONICAL_HOUR, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            WeekDateError::out_of_range(Component::Day, u16::from(date.day()), 1, 31)
        })
    }

    /// ISO week date of this day.
    ///
    /// # Errors
    /// See [`gregorian_to_iso`](crate::gregorian_to_iso).
    pub fn to_iso_week_date(&self) -> Result<IsoWeekDate, WeekDateError> {
        convert::gregorian_to_iso(self)
    }
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Calendar position first, then the raw components so that loose
        // spellings of the same day stay distinct.
        match self.day_number().cmp(&other.day_number()) {
            Ordering::Equal => {
                (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
            },
            ord => ord,
        }
    }
}

impl fmt::Display for GregorianDate {
    /// Writes the rolled-over day, so the text always names a real date. Only
    /// a loose value whose rollover leaves 1900..=2100 keeps its raw fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.normalized().unwrap_or(*self);
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{}",
            shown.year(),
            shown.month(),
            shown.day(),
            self.weekday_abbreviation()
        )
    }
}

impl FromStr for GregorianDate {
    type Err = WeekDateError;

    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD-dow`. A supplied weekday must match
    /// the date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WeekDateError::InvalidFormat("Empty date string".to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let (year, month, day, dow) = match parts.as_slice() {
            [year, month, day] => (*year, *month, *day, None),
            [year, month, day, dow] => (*year, *month, *day, Some(*dow)),
            _ => {
                return Err(WeekDateError::InvalidFormat(format!(
                    "Expected YYYY-MM-DD or YYYY-MM-DD-dow, found {trimmed}"
                )));
            },
        };

        let date = Self::new(
            parse_field(year, YEAR_DIGITS, trimmed)?,
            parse_field(month, MONTH_DIGITS, trimmed)?,
            parse_field(day, DAY_DIGITS, trimmed)?,
        )?;

        match dow {
            Some(dow) if dow != date.weekday_abbreviation() => Err(WeekDateError::InvalidFormat(
                format!("{trimmed}: weekday should be {}", date.weekday_abbreviation()),
            )),
            _ => Ok(date),
        }
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = WeekDateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        // NaiveDate is always a real calendar day, so only the year can be rejected.
        // Its year is literal: 57 is not read as 1957 here.
        let year = convert::supported_year(i64::from(value.year()))?;
        Self::new(year, value.month() as u8, value.day() as u8)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
