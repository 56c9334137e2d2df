//! Per-year facts for ISO years 1900 through 2099.
//!
//! The registry is built once, on first access, and never changes afterwards.
//! Every entry is cross-checked while building:
//!
//! - the long-year flag comes from [`LONG_YEARS_1900_TO_2099`] and must match
//!   the week count derived by the converter;
//! - the leap-day flag comes from the Gregorian divisibility rule and must
//!   match the number of days `chrono` counts in the year.
//!
//! A disagreement means the calendar arithmetic is broken, so the shared
//! registry refuses to come up at all.

use std::{fmt, sync::LazyLock};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::{
    DECEMBER, LEAP_YEAR_DAYS, LONG_YEARS_1900_TO_2099, MAX_WEEK, REGISTRY_END_YEAR,
    REGISTRY_FIRST_YEAR, SHORT_YEAR_WEEKS, WeekDateError,
    convert::weeks_in_year,
    error::Component,
    types::{is_leap_year, normalize_year},
};

const LAST_DAY_OF_DECEMBER: u32 = 31;

static REGISTRY: LazyLock<YearRegistry> = LazyLock::new(|| {
    YearRegistry::build()
        .unwrap_or_else(|err| panic!("year registry failed its self-check: {err}"))
});

/// Facts about one ISO week-numbering year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearDescriptor {
    year:      u16,
    long_year: bool,
    leap_day:  bool,
}

impl YearDescriptor {
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Whether the ISO year has 53 weeks
    pub const fn is_long_year(&self) -> bool {
        self.long_year
    }

    /// Whether the Gregorian year has a 29 February
    pub const fn is_leap_day_year(&self) -> bool {
        self.leap_day
    }

    pub const fn weeks(&self) -> u8 {
        if self.long_year { MAX_WEEK } else { SHORT_YEAR_WEEKS }
    }
}

impl fmt::Display for YearDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} weeks", self.year, self.weeks())?;
        if self.leap_day {
            write!(f, ", leap day")?;
        }
        Ok(())
    }
}

/// Read-only table of [`YearDescriptor`]s indexed by year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRegistry {
    descriptors: Vec<YearDescriptor>,
}

impl YearRegistry {
    /// Builds and cross-checks the table for 1900..=2099.
    ///
    /// # Errors
    /// Returns `WeekDateError::InternalConsistency` if the independent
    /// computations disagree for any year.
    pub fn build() -> Result<Self, WeekDateError> {
        Self::build_from(&LONG_YEARS_1900_TO_2099)
    }

    fn build_from(long_years: &[u16]) -> Result<Self, WeekDateError> {
        let descriptors = (REGISTRY_FIRST_YEAR..REGISTRY_END_YEAR)
            .map(|year| describe_year(year, long_years))
            .collect::<Result<Vec<_>, _>>()?;
        let registry = Self { descriptors };
        debug!(
            years = registry.descriptors.len(),
            long_years = registry.long_years().count(),
            "year registry built"
        );
        Ok(registry)
    }

    /// The process-wide registry, built on first use.
    ///
    /// # Panics
    /// Panics on first use if [`build`](Self::build) fails, which only
    /// happens when the calendar arithmetic itself is wrong.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Looks up a year; years up to 200 are read as two-digit years.
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` for years outside 1900..=2099.
    pub fn descriptor(&self, year: u16) -> Result<&YearDescriptor, WeekDateError> {
        let year = normalize_year(year);
        year.checked_sub(REGISTRY_FIRST_YEAR)
            .and_then(|index| self.descriptors.get(usize::from(index)))
            .ok_or_else(|| {
                WeekDateError::out_of_range(
                    Component::Year,
                    year,
                    REGISTRY_FIRST_YEAR,
                    REGISTRY_END_YEAR - 1,
                )
            })
    }

    /// # Errors
    /// See [`descriptor`](Self::descriptor).
    pub fn is_long_year(&self, year: u16) -> Result<bool, WeekDateError> {
        self.descriptor(year).map(YearDescriptor::is_long_year)
    }

    /// # Errors
    /// See [`descriptor`](Self::descriptor).
    pub fn is_leap_day_year(&self, year: u16) -> Result<bool, WeekDateError> {
        self.descriptor(year).map(YearDescriptor::is_leap_day_year)
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearDescriptor> {
        self.descriptors.iter()
    }

    /// Years with 53 weeks, in ascending order.
    pub fn long_years(&self) -> impl Iterator<Item = u16> + '_ {
        self.iter()
            .filter(|descriptor| descriptor.long_year)
            .map(YearDescriptor::year)
    }
}

/// Whether ISO year `year` has 53 weeks, from the shared registry.
///
/// # Errors
/// Returns `WeekDateError::InvalidRange` for years outside 1900..=2099.
pub fn is_long_year(year: u16) -> Result<bool, WeekDateError> {
    YearRegistry::global().is_long_year(year)
}

/// Whether Gregorian year `year` has 366 days, from the shared registry.
///
/// # Errors
/// Returns `WeekDateError::InvalidRange` for years outside 1900..=2099.
pub fn is_leap_day_year(year: u16) -> Result<bool, WeekDateError> {
    YearRegistry::global().is_leap_day_year(year)
}

fn describe_year(year: u16, long_years: &[u16]) -> Result<YearDescriptor, WeekDateError> {
    let long_year = long_years.contains(&year);
    let weeks = weeks_in_year(year);
    if long_year != (weeks == MAX_WEEK) {
        return Err(WeekDateError::InternalConsistency {
            year,
            detail: format!("long-year table says {long_year}, converter counts {weeks} weeks"),
        });
    }

    let leap_day = is_leap_year(year);
    let days = days_in_year(year)?;
    if leap_day != (days == LEAP_YEAR_DAYS) {
        return Err(WeekDateError::InternalConsistency {
            year,
            detail: format!("leap rule says {leap_day}, year has {days} days"),
        });
    }

    Ok(YearDescriptor {
        year,
        long_year,
        leap_day,
    })
}

/// Counts the days of `year` as the ordinal of its 31 December.
fn days_in_year(year: u16) -> Result<u32, WeekDateError> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(DECEMBER), LAST_DAY_OF_DECEMBER)
        .map(|last_day| last_day.ordinal())
        .ok_or_else(|| WeekDateError::InternalConsistency {
            year,
            detail: "31 December is not a calendar day".to_owned(),
        })
}
