//! Weekday (Monday-Friday) counting
//!
//! Dates are naive calendar dates. "Elapsed" covers the 1st of the month up to
//! the day before the reference date; "remaining" covers the reference date
//! through month end, so the two always partition the month's weekdays.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::month::MonthCalendar;

pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Count Monday-Friday dates in the inclusive range [start, end]
///
/// Returns 0 when `start > end`.
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    let total_days = (end - start).num_days() + 1;
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    // Leftover partial week
    let tail_start = start + Duration::days(full_weeks * 7);
    for offset in 0..(total_days % 7) {
        if is_weekday(tail_start + Duration::days(offset)) {
            count += 1;
        }
    }

    count as u32
}

/// Weekdays from the 1st of the month through the day before `date`
pub fn elapsed_weekdays_in_month(date: NaiveDate) -> u32 {
    if date.day() == 1 {
        return 0;
    }
    count_weekdays(MonthCalendar::first_day(date), date - Duration::days(1))
}

/// Weekdays from `date` (counted as remaining) through the last day of the month
pub fn remaining_weekdays_in_month(date: NaiveDate) -> u32 {
    count_weekdays(date, MonthCalendar::last_day(date))
}

pub fn total_weekdays_in_month(date: NaiveDate) -> u32 {
    count_weekdays(MonthCalendar::first_day(date), MonthCalendar::last_day(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_count_weekdays_single_week() {
        // Mon 2025-10-20 .. Fri 2025-10-24
        assert_eq!(count_weekdays(date(2025, 10, 20), date(2025, 10, 24)), 5);
    }

    #[test]
    fn test_count_weekdays_with_weekend() {
        assert_eq!(count_weekdays(date(2025, 10, 20), date(2025, 10, 26)), 5);
    }

    #[test]
    fn test_count_weekdays_saturday_to_saturday() {
        // Crosses into November
        assert_eq!(count_weekdays(date(2025, 10, 25), date(2025, 11, 1)), 5);
    }

    #[test]
    fn test_count_weekdays_single_day() {
        assert_eq!(count_weekdays(date(2025, 10, 20), date(2025, 10, 20)), 1);
        assert_eq!(count_weekdays(date(2025, 10, 25), date(2025, 10, 25)), 0);
    }

    #[test]
    fn test_count_weekdays_full_month() {
        // October 2025 starts on a Wednesday and ends on a Friday
        assert_eq!(count_weekdays(date(2025, 10, 1), date(2025, 10, 31)), 23);
    }

    #[test]
    fn test_count_weekdays_reversed_range() {
        assert_eq!(count_weekdays(date(2025, 10, 25), date(2025, 10, 20)), 0);
        assert_eq!(count_weekdays(date(2025, 10, 2), date(2025, 10, 1)), 0);
    }

    #[test]
    fn test_count_weekdays_matches_day_by_day() {
        let start = date(2024, 1, 1);
        for len in 0..60 {
            let end = start + Duration::days(len);
            let expected = (0..=len)
                .filter(|&d| is_weekday(start + Duration::days(d)))
                .count() as u32;
            assert_eq!(count_weekdays(start, end), expected, "range length {}", len + 1);
        }
    }

    #[test]
    fn test_remaining_weekdays() {
        assert_eq!(remaining_weekdays_in_month(date(2025, 10, 20)), 10);
        assert_eq!(remaining_weekdays_in_month(date(2025, 10, 25)), 5);
        assert_eq!(remaining_weekdays_in_month(date(2025, 10, 1)), 23);
        assert_eq!(remaining_weekdays_in_month(date(2025, 10, 31)), 1);
    }

    #[test]
    fn test_elapsed_weekdays() {
        assert_eq!(elapsed_weekdays_in_month(date(2025, 10, 20)), 13);
        assert_eq!(elapsed_weekdays_in_month(date(2025, 10, 25)), 18);
        assert_eq!(elapsed_weekdays_in_month(date(2025, 10, 1)), 0);
        assert_eq!(elapsed_weekdays_in_month(date(2025, 10, 2)), 1);
        assert_eq!(elapsed_weekdays_in_month(date(2025, 10, 31)), 22);
    }

    #[test]
    fn test_elapsed_plus_remaining_is_month_total() {
        for (y, m) in [(2024, 2), (2025, 2), (2025, 4), (2025, 10), (2025, 12)] {
            let first = date(y, m, 1);
            let total = total_weekdays_in_month(first);
            let days = super::super::days_in_month(y, m);
            for d in 1..=days {
                let day = date(y, m, d);
                assert_eq!(
                    elapsed_weekdays_in_month(day) + remaining_weekdays_in_month(day),
                    total,
                    "{}",
                    day
                );
            }
        }
    }
}
