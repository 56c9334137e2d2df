use chrono::{Datelike, NaiveDate};
use iso_week_anchor::{
    GregorianDate, IsoWeekDate, LONG_YEARS_1900_TO_2099, MAX_YEAR, MIN_YEAR, SilentObserver,
    YearRegistry, compute_month_week_anchor_with, gregorian_to_iso, iso_to_gregorian,
    iso_week_start, is_leap_day_year, is_long_year, weeks_in_year,
};
use proptest::prelude::*;

fn all_days() -> impl Iterator<Item = GregorianDate> {
    NaiveDate::from_ymd_opt(i32::from(MIN_YEAR), 1, 1)
        .unwrap()
        .iter_days()
        .take_while(|naive| naive.year() <= i32::from(MAX_YEAR))
        .map(|naive| GregorianDate::try_from(naive).unwrap())
}

#[test]
fn forward_matches_chrono_iso_week_for_every_day() {
    let mut count = 0;
    for date in all_days() {
        let iso = gregorian_to_iso(&date).unwrap();
        let naive = NaiveDate::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .unwrap();
        let expected = naive.iso_week();
        assert_eq!(
            (i32::from(iso.year()), u32::from(iso.week()), u32::from(iso.day())),
            (expected.year(), expected.week(), naive.weekday().number_from_monday()),
            "ISO week mismatch for {date}"
        );
        count += 1;
    }
    // 201 years, 49 of them with a leap day
    assert_eq!(count, 201 * 365 + 49);
}

#[test]
fn inverse_plus_day_offset_reconstructs_every_day() {
    for date in all_days() {
        let iso = gregorian_to_iso(&date).unwrap();
        assert_eq!(iso_to_gregorian(&iso).unwrap(), date, "round trip failed for {date} ({iso})");

        // The first week of 1900 starts on 1900-01-01 itself, so every Monday is in range
        let monday = iso_week_start(iso.year(), iso.week()).unwrap();
        assert_eq!(
            monday.days_until(&date),
            i64::from(iso.day()) - 1,
            "{date} is not {} days after {monday}",
            iso.day() - 1
        );
    }
}

#[test]
fn weekday_numbers_follow_calendar_order() {
    let mut previous: Option<IsoWeekDate> = None;
    for date in all_days() {
        let iso = gregorian_to_iso(&date).unwrap();
        assert_eq!(
            u32::from(iso.day()),
            date.weekday().number_from_monday(),
            "weekday mismatch for {date}"
        );
        if let Some(previous) = previous {
            if previous.day() == 7 {
                assert_eq!(iso.day(), 1);
                assert!(iso.week_of() > previous.week_of());
            } else {
                assert_eq!(iso.day(), previous.day() + 1);
                assert_eq!(iso.week_of(), previous.week_of());
            }
        }
        previous = Some(iso);
    }
}

#[test]
fn weeks_in_year_agrees_with_long_year_table() {
    for year in 1900..2100u16 {
        let expected = if LONG_YEARS_1900_TO_2099.contains(&year) { 53 } else { 52 };
        assert_eq!(weeks_in_year(year), expected, "week count for {year}");
        assert_eq!(is_long_year(year), Ok(expected == 53));
    }
}

#[test]
fn last_week_of_each_year_exists() {
    for year in 1900..2100u16 {
        let weeks = weeks_in_year(year);
        let last_monday = iso_week_start(year, weeks).unwrap();
        let iso = gregorian_to_iso(&last_monday).unwrap();
        assert_eq!((iso.year(), iso.week(), iso.day()), (year, weeks, 1));
    }
}

#[test]
fn leap_day_flags_match_february_length() {
    for year in 1900..2100u16 {
        let has_leap_day = NaiveDate::from_ymd_opt(i32::from(year), 2, 29).is_some();
        assert_eq!(is_leap_day_year(year), Ok(has_leap_day));
    }
}

#[test]
fn registry_is_shared_and_stable() {
    let first = YearRegistry::global();
    let second = YearRegistry::global();
    assert!(std::ptr::eq(first, second));
    assert_eq!(*first, YearRegistry::build().unwrap());
}

#[test]
fn registry_reads_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| YearRegistry::global().long_years().count()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), LONG_YEARS_1900_TO_2099.len());
    }
}

proptest! {
    #[test]
    fn long_years_are_flanked_by_short_years(year in 1901u16..2099) {
        if is_long_year(year).unwrap() {
            prop_assert!(!is_long_year(year - 1).unwrap());
            prop_assert!(!is_long_year(year + 1).unwrap());
        }
    }

    #[test]
    fn anchor_is_monday_within_six_days_before_month_start(
        year in 1901u16..=2100,
        month in 1u8..=12,
        day in 1u8..=28,
    ) {
        let anchor = compute_month_week_anchor_with(year, month, day, &mut SilentObserver).unwrap();
        let month_start = anchor.month_start();
        prop_assert_eq!(month_start, GregorianDate::new(year, month, 1).unwrap());
        prop_assert_eq!(anchor.start_date().weekday(), chrono::Weekday::Mon);
        prop_assert!((0..=6).contains(&anchor.lead_days()));
        prop_assert!(anchor.start_date() <= anchor.spec_date());
        prop_assert_eq!(
            gregorian_to_iso(&anchor.start_date()).unwrap(),
            anchor.start_date_iso()
        );
        prop_assert_eq!(anchor.start_date_iso().week_of(), anchor.month_start_iso().week_of());
    }

    #[test]
    fn text_forms_parse_back(year in 1900u16..=2100, month in 0u8..=12, day in 0u8..=31) {
        let date = GregorianDate::new(year, month, day).unwrap();
        // The text form names the rolled-over day unless that leaves the window
        let shown = date.normalized().unwrap_or(date);
        prop_assert_eq!(date.to_string().parse::<GregorianDate>().unwrap(), shown);

        if let Ok(iso) = gregorian_to_iso(&date) {
            prop_assert_eq!(iso.to_string().parse::<IsoWeekDate>().unwrap(), iso);
            prop_assert_eq!(iso.week_of().to_string().parse::<IsoWeekDate>().unwrap(), iso.week_of());
        }
    }
}
