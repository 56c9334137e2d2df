//! Gregorian ↔ ISO-8601 week date conversion for the years 1900 through 2100.
//!
//! - [`GregorianDate`] and [`IsoWeekDate`] are validated, immutable values.
//! - [`gregorian_to_iso`], [`iso_week_start`] and [`iso_to_gregorian`] convert
//!   between them following the ISO rule that week 1 contains the year's first
//!   Thursday.
//! - [`is_long_year`] and [`is_leap_day_year`] answer from a table built once
//!   per process and cross-checked on construction.
//! - [`compute_month_week_anchor`] finds the Monday starting the ISO week that
//!   contains the first day of a date's month.
//!
//! Every year argument up to 200 is a two-digit year: `57` means 1957.
//!
//! ```
//! use iso_week_anchor::{GregorianDate, gregorian_to_iso, is_long_year};
//!
//! let date = GregorianDate::new(2024, 12, 31).unwrap();
//! assert_eq!(date.to_string(), "2024-12-31-tue");
//! assert_eq!(gregorian_to_iso(&date).unwrap().to_string(), "2025-W01-2");
//! assert_eq!(is_long_year(2015), Ok(true));
//! ```

mod anchor;
mod consts;
mod convert;
mod error;
mod gregorian;
mod prelude;
mod registry;
mod types;
mod week_date;

pub use anchor::{
    AnchorObserver, AnchorResult, SilentObserver, TracingObserver, compute_month_week_anchor,
    compute_month_week_anchor_with,
};
pub use consts::*;
pub use convert::{gregorian_to_iso, iso_to_gregorian, iso_week_start, weeks_in_year};
pub use error::{Component, WeekDateError};
pub use gregorian::GregorianDate;
pub use registry::{YearDescriptor, YearRegistry, is_leap_day_year, is_long_year};
pub use types::{Day, DayOfWeek, Month, Week, Year, is_leap_year};
pub use week_date::IsoWeekDate;
