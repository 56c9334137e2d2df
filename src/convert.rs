//! Gregorian ↔ ISO-8601 week date conversion.
//!
//! Dates are mapped to a day number (days since 1970-01-01) with Howard
//! Hinnant's civil-calendar algorithms, and weeks are located from there:
//! week 1 of an ISO year is the week containing 4 January, so its Monday is
//! 4 January minus that day's offset from Monday.
//!
//! Ref: <http://howardhinnant.github.io/date_algorithms.html>
//!
//! chrono is not used here: loose dates (day 0, 30 February, month 0) need
//! the rollover arithmetic, which `NaiveDate` rejects. The tests compare
//! these results with chrono's `iso_week()` for every day in range.

use chrono::Weekday;
use tracing::trace;

use crate::{
    DECEMBER, GregorianDate, IsoWeekDate, JANUARY, MAX_WEEK, MAX_YEAR, MIN_YEAR, SHORT_YEAR_WEEKS,
    WEEK_ONE_ANCHOR_DAY, WeekDateError, error::Component, types::DayOfWeek,
};

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_ERA: i64 = 146_097;
const YEARS_PER_ERA: i64 = 400;
/// Day number of 0000-03-01, the start of era 0
const EPOCH_SHIFT: i64 = 719_468;
/// 1970-01-01 was a Thursday
const EPOCH_OFFSET_FROM_MONDAY: i64 = 3;

const WEEKDAYS_FROM_MONDAY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Day number of `year-month-day`.
///
/// Out-of-month components roll over: day 0 is the last day of the previous
/// month, days past the month end continue into the next month, and month 0
/// is December of the previous year.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (year, month) = if month == 0 {
        (year - 1, DECEMBER as i64)
    } else {
        (year, month as i64)
    };
    // Years start in March so the leap day is the last day of the year
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(YEARS_PER_ERA);
    let year_of_era = year - era * YEARS_PER_ERA;
    let month_from_march = (month + 9) % 12;
    let first_of_month_in_year = (153 * month_from_march + 2) / 5;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + first_of_month_in_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT + day as i64 - 1
}

/// `(year, month, day)` of a day number. Always a real calendar day.
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let shifted = days + EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    };
    let year = year_of_era + era * YEARS_PER_ERA + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

/// 0 for Monday through 6 for Sunday.
const fn days_from_monday(days: i64) -> i64 {
    (days + EPOCH_OFFSET_FROM_MONDAY).rem_euclid(DAYS_PER_WEEK)
}

pub(crate) const fn weekday_from_day_number(days: i64) -> Weekday {
    WEEKDAYS_FROM_MONDAY[days_from_monday(days) as usize]
}

/// Day number of the Monday starting week 1 of ISO year `year`.
const fn week_one_start(year: i64) -> i64 {
    let anchor = days_from_civil(year, JANUARY, WEEK_ONE_ANCHOR_DAY);
    anchor - days_from_monday(anchor)
}

/// ISO `(year, week, weekday)` of a day number.
const fn iso_from_day_number(days: i64) -> (i64, u8, u8) {
    let (year, _, _) = civil_from_days(days);
    let mut iso_year = year;
    let mut start = week_one_start(year);
    if days < start {
        iso_year -= 1;
        start = week_one_start(iso_year);
    } else {
        let next_start = week_one_start(year + 1);
        if days >= next_start {
            iso_year += 1;
            start = next_start;
        }
    }
    let week = (days - start) / DAYS_PER_WEEK + 1;
    (iso_year, week as u8, days_from_monday(days) as u8 + 1)
}

/// Number of ISO weeks (52 or 53) in week-numbering year `year`.
pub const fn weeks_in_year(year: u16) -> u8 {
    let year = year as i64;
    let weeks = (week_one_start(year + 1) - week_one_start(year)) / DAYS_PER_WEEK;
    if weeks == MAX_WEEK as i64 {
        MAX_WEEK
    } else {
        SHORT_YEAR_WEEKS
    }
}

/// Checks that a computed year lies in the supported window. Unlike
/// [`Year::new`](crate::Year::new) no two-digit shorthand applies.
pub(crate) fn supported_year(year: i64) -> Result<u16, WeekDateError> {
    u16::try_from(year)
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
        .ok_or_else(|| {
            let value = u16::try_from(year.clamp(0, i64::from(u16::MAX))).unwrap_or(u16::MAX);
            WeekDateError::out_of_range(Component::Year, value, MIN_YEAR, MAX_YEAR)
        })
}

pub(crate) fn date_from_day_number(days: i64) -> Result<GregorianDate, WeekDateError> {
    let (year, month, day) = civil_from_days(days);
    GregorianDate::new(supported_year(year)?, month, day)
}

/// Converts a Gregorian date to its ISO-8601 week date.
///
/// Near the turn of the year the ISO year can differ from the calendar year:
/// 2024-12-31 is `2025-W01-2` and 2023-01-01 is `2022-W52-7`.
///
/// # Errors
/// Returns `WeekDateError::InvalidRange` when a date with out-of-month
/// components rolls over to an ISO year outside 1900..=2100, for example
/// day 0 of January 1900.
pub fn gregorian_to_iso(date: &GregorianDate) -> Result<IsoWeekDate, WeekDateError> {
    let (year, week, day) = iso_from_day_number(date.day_number());
    let iso = IsoWeekDate::new(supported_year(year)?, week, day)?;
    trace!(%date, %iso, "gregorian to iso");
    Ok(iso)
}

/// The Monday that starts ISO week `week` of `year`, pinned to midday like
/// every [`GregorianDate`].
///
/// Week 0 is the week before week 1, and week 53 of a 52-week year is week 1
/// of the following year. Years up to 200 are read as two-digit years.
///
/// # Errors
/// Returns `WeekDateError::InvalidRange` if the arguments fail
/// [`IsoWeekDate::new`] or the Monday falls outside 1900..=2100.
pub fn iso_week_start(year: u16, week: u8) -> Result<GregorianDate, WeekDateError> {
    iso_to_gregorian(&IsoWeekDate::whole_week(year, week)?)
}

/// The Gregorian date of an ISO week date. A whole-week value resolves to
/// the Monday of its week.
///
/// # Errors
/// Returns `WeekDateError::InvalidRange` if the result falls outside 1900..=2100.
pub fn iso_to_gregorian(date: &IsoWeekDate) -> Result<GregorianDate, WeekDateError> {
    let offset = if date.is_whole_week() {
        0
    } else {
        i64::from(date.day() - DayOfWeek::MONDAY.get())
    };
    let monday = week_one_start(i64::from(date.year())) + (i64::from(date.week()) - 1) * DAYS_PER_WEEK;
    let gregorian = date_from_day_number(monday + offset)?;
    trace!(%date, %gregorian, "iso to gregorian");
    Ok(gregorian)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    fn iso(year: u16, week: u8, day: u8) -> IsoWeekDate {
        IsoWeekDate::new(year, week, day).unwrap()
    }

    #[test]
    fn test_days_from_civil_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
    }

    #[test]
    fn test_days_from_civil_rollover() {
        // Day 0 is the last day of the previous month
        assert_eq!(days_from_civil(2024, 3, 0), days_from_civil(2024, 2, 29));
        // Day 30 of February spills into March
        assert_eq!(days_from_civil(2023, 2, 30), days_from_civil(2023, 3, 2));
        // Month 0 is December of the previous year
        assert_eq!(days_from_civil(2024, 0, 15), days_from_civil(2023, 12, 15));
        assert_eq!(days_from_civil(2024, 1, 0), days_from_civil(2023, 12, 31));
    }

    #[test]
    fn test_weekday_from_day_number() {
        assert_eq!(weekday_from_day_number(0), Weekday::Thu);
        assert_eq!(weekday_from_day_number(-1), Weekday::Wed);
        assert_eq!(weekday_from_day_number(days_from_civil(1900, 1, 1)), Weekday::Mon);
        assert_eq!(weekday_from_day_number(days_from_civil(1957, 1, 1)), Weekday::Tue);
    }

    #[test]
    fn test_year_boundary_cases() {
        struct TestCase {
            date:        (u16, u8, u8),
            expected:    (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (2024, 12, 31),
                expected:    (2025, 1, 2),
                description: "Tuesday 31 December in week 1 of the next year",
            },
            TestCase {
                date:        (2023, 1, 1),
                expected:    (2022, 52, 7),
                description: "Sunday 1 January in week 52 of the previous year",
            },
            TestCase {
                date:        (2021, 1, 1),
                expected:    (2020, 53, 5),
                description: "Friday 1 January in week 53 of a long year",
            },
            TestCase {
                date:        (2020, 12, 31),
                expected:    (2020, 53, 4),
                description: "Thursday 31 December of a long year",
            },
            TestCase {
                date:        (2026, 1, 1),
                expected:    (2026, 1, 4),
                description: "year starting on Thursday",
            },
            TestCase {
                date:        (1900, 1, 1),
                expected:    (1900, 1, 1),
                description: "first supported day",
            },
            TestCase {
                date:        (2100, 12, 31),
                expected:    (2100, 52, 5),
                description: "last supported day",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let (iy, iw, id) = case.expected;
            assert_eq!(
                gregorian_to_iso(&gregorian(y, m, d)).unwrap(),
                iso(iy, iw, id),
                "{y}-{m:02}-{d:02}: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_loose_date_converts_rolled_over() {
        // 2023-02-30 is 2023-03-02, a Thursday
        let loose = gregorian(2023, 2, 30);
        let real = gregorian(2023, 3, 2);
        assert_eq!(gregorian_to_iso(&loose).unwrap(), gregorian_to_iso(&real).unwrap());
    }

    #[test]
    fn test_rollover_out_of_window() {
        // 1899-12-31 is a Sunday in ISO 1899-W52
        let result = gregorian_to_iso(&gregorian(1900, 1, 0));
        assert!(matches!(
            result,
            Err(WeekDateError::InvalidRange {
                component: Component::Year,
                value: 1899,
                ..
            })
        ));
    }

    #[test]
    fn test_iso_week_start() {
        assert_eq!(iso_week_start(2025, 1).unwrap(), gregorian(2024, 12, 30));
        assert_eq!(iso_week_start(1957, 1).unwrap(), gregorian(1956, 12, 31));
        assert_eq!(iso_week_start(2020, 53).unwrap(), gregorian(2020, 12, 28));
        assert_eq!(iso_week_start(57, 1).unwrap(), iso_week_start(1957, 1).unwrap());
    }

    #[test]
    fn test_iso_week_start_overflow_weeks() {
        // Week 0 is the week before week 1
        assert_eq!(iso_week_start(2025, 0).unwrap(), iso_week_start(2024, 52).unwrap());
        // Week 53 of a 52-week year is week 1 of the next
        assert_eq!(iso_week_start(2021, 53).unwrap(), iso_week_start(2022, 1).unwrap());
    }

    #[test]
    fn test_iso_week_start_invalid() {
        assert!(matches!(
            iso_week_start(2024, 54),
            Err(WeekDateError::InvalidRange {
                component: Component::Week,
                ..
            })
        ));
        // Monday before 1900-01-01
        assert!(iso_week_start(1900, 0).is_err());
    }

    #[test]
    fn test_iso_to_gregorian_day_offset() {
        assert_eq!(iso_to_gregorian(&iso(2022, 52, 7)).unwrap(), gregorian(2023, 1, 1));
        assert_eq!(iso_to_gregorian(&iso(2025, 1, 2)).unwrap(), gregorian(2024, 12, 31));
        assert_eq!(
            iso_to_gregorian(&IsoWeekDate::whole_week(2025, 1).unwrap()).unwrap(),
            gregorian(2024, 12, 30)
        );
    }

    #[test]
    fn test_weeks_in_year() {
        assert_eq!(weeks_in_year(2015), 53);
        assert_eq!(weeks_in_year(2014), 52);
        assert_eq!(weeks_in_year(2016), 52);
        assert_eq!(weeks_in_year(2020), 53);
        assert_eq!(weeks_in_year(2026), 53);
        // 2100 starts on a Friday and is not a leap year
        assert_eq!(weeks_in_year(2100), 52);
    }

    #[test]
    fn test_supported_year() {
        assert_eq!(supported_year(1900), Ok(1900));
        assert_eq!(supported_year(2100), Ok(2100));
        // No two-digit shorthand for computed years
        assert!(supported_year(57).is_err());
        assert!(supported_year(-3).is_err());
        assert!(supported_year(2101).is_err());
    }
}
