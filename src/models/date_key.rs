//! Date keys and day labels.
//!
//! A date key is the `YYYYMMDD` integer used to join the viewed date with the
//! fetched menu records.

use chrono::{Datelike, Days, NaiveDate};

/// Spanish weekday names, indexed from Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Convert a calendar date into its `YYYYMMDD` key.
pub fn format_date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Fallback day title used when no record exists, e.g. "Viernes 14".
pub fn day_title(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!("{} {}", weekday, date.day())
}

/// The day after `date`, if representable.
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}

/// The day before `date`, if representable.
pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}
