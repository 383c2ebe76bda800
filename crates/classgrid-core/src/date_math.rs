//! Calendar arithmetic on local dates
//!
//! All functions are total: results that would leave chrono's supported
//! range saturate to the input date instead of panicking.

use crate::models::DayLabel;
use chrono::{Datelike, Days, NaiveDate, TimeDelta};

/// Monday of the ISO week containing `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Weekday label of `date`
pub fn day_label(date: NaiveDate) -> DayLabel {
    DayLabel::from(date.weekday())
}

/// Move `date` by `units` days, or by `units` weeks when `by_week` is set
pub fn shift_date(date: NaiveDate, units: i64, by_week: bool) -> NaiveDate {
    let days = if by_week { units.saturating_mul(7) } else { units };
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// `count` consecutive dates starting at `first`
pub fn week_days(first: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count as i64)
        .map(|offset| shift_date(first, offset, false))
        .collect()
}
