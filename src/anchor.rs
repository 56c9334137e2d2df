//! Month-to-week anchoring: the Monday starting the ISO week that contains the
//! first day of a date's month.

use serde::Serialize;
use tracing::debug;

use crate::{GregorianDate, IsoWeekDate, WeekDateError, convert, prelude::*};

/// Receives each intermediate date of an anchor computation.
///
/// Observers see values only after they are computed and cannot change them.
pub trait AnchorObserver {
    fn spec_date(&mut self, _date: &GregorianDate, _iso: &IsoWeekDate) {}
    fn month_start(&mut self, _date: &GregorianDate, _iso: &IsoWeekDate) {}
    fn week_start(&mut self, _date: &GregorianDate, _iso: &IsoWeekDate) {}
}

/// Emits every step as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AnchorObserver for TracingObserver {
    fn spec_date(&mut self, date: &GregorianDate, iso: &IsoWeekDate) {
        debug!(%date, %iso, "spec date");
    }

    fn month_start(&mut self, date: &GregorianDate, iso: &IsoWeekDate) {
        debug!(%date, %iso, "month start");
    }

    fn week_start(&mut self, date: &GregorianDate, iso: &IsoWeekDate) {
        debug!(%date, %iso, "week start");
    }
}

/// Ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl AnchorObserver for SilentObserver {}

/// The dates involved in anchoring one date to the start of its month's first
/// ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(
    fmt = "{spec_date} ({spec_date_iso}) month {month_start} ({month_start_iso}) week {start_date} ({start_date_iso})"
)]
pub struct AnchorResult {
    spec_date:       GregorianDate,
    spec_date_iso:   IsoWeekDate,
    month_start:     GregorianDate,
    month_start_iso: IsoWeekDate,
    start_date:      GregorianDate,
    start_date_iso:  IsoWeekDate,
}

impl AnchorResult {
    /// Anchors an already constructed date.
    ///
    /// # Errors
    /// Returns `WeekDateError::InvalidRange` if any step leaves 1900..=2100.
    pub fn for_date(
        date: GregorianDate,
        observer: &mut (impl AnchorObserver + ?Sized),
    ) -> Result<Self, WeekDateError> {
        let spec_date_iso = convert::gregorian_to_iso(&date)?;
        observer.spec_date(&date, &spec_date_iso);

        let month_start = date.first_of_month();
        let month_start_iso = convert::gregorian_to_iso(&month_start)?;
        observer.month_start(&month_start, &month_start_iso);

        let start_date = convert::iso_week_start(month_start_iso.year(), month_start_iso.week())?;
        let start_date_iso = month_start_iso.monday();
        observer.week_start(&start_date, &start_date_iso);

        Ok(Self {
            spec_date: date,
            spec_date_iso,
            month_start,
            month_start_iso,
            start_date,
            start_date_iso,
        })
    }

    /// The date that was anchored
    pub const fn spec_date(&self) -> GregorianDate {
        self.spec_date
    }

    pub const fn spec_date_iso(&self) -> IsoWeekDate {
        self.spec_date_iso
    }

    /// First day of the spec date's month
    pub const fn month_start(&self) -> GregorianDate {
        self.month_start
    }

    pub const fn month_start_iso(&self) -> IsoWeekDate {
        self.month_start_iso
    }

    /// Monday on or before [`month_start`](Self::month_start)
    pub const fn start_date(&self) -> GregorianDate {
        self.start_date
    }

    /// [`start_date`](Self::start_date) as an ISO week date, weekday 1
    pub const fn start_date_iso(&self) -> IsoWeekDate {
        self.start_date_iso
    }

    /// Days from the week start to the month start, 0..=6.
    pub const fn lead_days(&self) -> i64 {
        self.start_date.days_until(&self.month_start)
    }
}

/// Finds the Monday starting the ISO week that contains the first day of the
/// month of `year-month-day`, logging each step through [`TracingObserver`].
///
/// Years up to 200 are read as two-digit years.
///
/// # Errors
/// Returns `WeekDateError::InvalidRange` if the date fails
/// [`GregorianDate::new`] or a step leaves 1900..=2100.
///
/// # Examples
///
/// ```
/// use iso_week_anchor::{GregorianDate, compute_month_week_anchor};
///
/// let anchor = compute_month_week_anchor(1957, 1, 27).unwrap();
/// assert_eq!(anchor.month_start(), GregorianDate::new(1957, 1, 1).unwrap());
/// assert_eq!(anchor.start_date().to_string(), "1956-12-31-mon");
/// assert_eq!(anchor.start_date_iso().to_string(), "1957-W01-1");
/// ```
pub fn compute_month_week_anchor(
    year: u16,
    month: u8,
    day: u8,
) -> Result<AnchorResult, WeekDateError> {
    compute_month_week_anchor_with(year, month, day, &mut TracingObserver)
}

/// [`compute_month_week_anchor`] reporting to a caller-supplied observer.
///
/// # Errors
/// See [`compute_month_week_anchor`].
pub fn compute_month_week_anchor_with(
    year: u16,
    month: u8,
    day: u8,
    observer: &mut (impl AnchorObserver + ?Sized),
) -> Result<AnchorResult, WeekDateError> {
    AnchorResult::for_date(GregorianDate::new(year, month, day)?, observer)
}
