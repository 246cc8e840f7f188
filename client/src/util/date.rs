//! Calendar helpers for the workout form and list.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::NaiveDate;

/// Today's date in the local time zone (the browser's when hydrated).
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Human-readable date for list rows, e.g. `Jan 5, 2024`.
#[must_use]
pub fn format_display(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
