use super::*;
use time::macros::date;

#[test]
fn month_tile_uses_three_letters() {
    assert_eq!(month_tile(date!(2025 - 01 - 15)), "Jan");
    assert_eq!(month_tile(date!(2025 - 09 - 01)), "Sep");
}

#[test]
fn weekday_year_formats_caption() {
    assert_eq!(weekday_year(date!(2025 - 03 - 14)), "Friday, 2025");
    assert_eq!(weekday_year(date!(2024 - 02 - 29)), "Thursday, 2024");
}
