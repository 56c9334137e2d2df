use crate::prelude::*;

/// The date component a range check was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Component {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "weekday")]
    Weekday,
}

/// Error type for week-date construction, conversion and registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekDateError {
    /// A component lies outside its accepted range.
    ///
    /// For years, `value` is the value after the two-digit normalization.
    #[error("Invalid {component}: {value} (must be {min}-{max})")]
    InvalidRange {
        component: Component,
        value:     u16,
        min:       u16,
        max:       u16,
    },

    /// Text could not be parsed as a date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Two independent calendar computations disagree. This is a defect in the
    /// arithmetic, not bad input.
    #[error("Calendar arithmetic disagrees for {year}: {detail}")]
    InternalConsistency { year: u16, detail: String },
}

impl WeekDateError {
    pub(crate) const fn out_of_range(component: Component, value: u16, min: u16, max: u16) -> Self {
        Self::InvalidRange {
            component,
            value,
            min,
            max,
        }
    }

    /// Returns `true` for errors caused by caller input rather than a defect.
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::InternalConsistency { .. })
    }
}
