//! Calendar formatting for exam-day tiles.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::macros::format_description;

/// Three-letter month shown on the tile, e.g. `Jan`.
pub fn month_tile(date: Date) -> String {
    date.format(format_description!("[month repr:short]")).unwrap_or_default()
}

/// `Weekday, Year` caption shown under an exam name.
pub fn weekday_year(date: Date) -> String {
    date.format(format_description!("[weekday], [year]")).unwrap_or_default()
}
