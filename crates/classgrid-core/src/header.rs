//! Navigation header label

use crate::date_math::{day_label, start_of_week};
use crate::models::Locale;
use crate::view_state::ViewState;
use chrono::{Datelike, NaiveDate};

/// Locale-specific month names
pub trait MonthNames {
    /// Name of the month `date` falls in
    fn month_name(&self, date: NaiveDate) -> &'static str;
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMonths;

impl MonthNames for EnglishMonths {
    fn month_name(&self, date: NaiveDate) -> &'static str {
        ENGLISH_MONTHS[date.month0() as usize]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchMonths;

impl MonthNames for FrenchMonths {
    fn month_name(&self, date: NaiveDate) -> &'static str {
        FRENCH_MONTHS[date.month0() as usize]
    }
}

impl MonthNames for Locale {
    fn month_name(&self, date: NaiveDate) -> &'static str {
        match self {
            Locale::En => EnglishMonths.month_name(date),
            Locale::Fr => FrenchMonths.month_name(date),
        }
    }
}

/// "Week of 19 October" in week modes, "Wednesday 21 October" in day mode
pub fn format_header_label(state: &ViewState, months: &impl MonthNames) -> String {
    if state.mode.is_week() {
        let monday = start_of_week(state.selected_date);
        return format!("Week of {} {}", monday.day(), months.month_name(monday));
    }

    let date = state.selected_date;
    format!(
        "{} {} {}",
        day_label(date).name(),
        date.day(),
        months.month_name(date)
    )
}
