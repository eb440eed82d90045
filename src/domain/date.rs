//! Date helpers for view-model records

use chrono::NaiveDate;

/// Build a calendar date; an impossible date falls back to the epoch
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// `Mar 4, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Mar 4`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_zero_padding() {
        assert_eq!(format_date(ymd(2024, 3, 4)), "Mar 4, 2024");
        assert_eq!(format_short_date(ymd(2024, 12, 25)), "Dec 25");
    }

    #[test]
    fn impossible_dates_do_not_panic() {
        assert_eq!(ymd(2024, 2, 30), NaiveDate::default());
    }
}
