//! Month length and the statutory monthly working-hour baseline

use chrono::{Datelike, Duration, NaiveDate};

/// Statutory weekly working-hour cap
pub const STATUTORY_WEEKLY_HOURS: f64 = 40.0;

/// Number of calendar days in `month` (1-12) of `year`
///
/// Leap years are handled by chrono's calendar. Returns 0 for a month
/// outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Statutory monthly working hours: the 40-hour week prorated by calendar days
///
/// Formula: (days in month / 7) * 40. Calendar days, not working days.
pub fn legal_work_hours(days_in_month: u32) -> f64 {
    (days_in_month as f64 / 7.0) * STATUTORY_WEEKLY_HOURS
}

/// Calendar facts for the month containing a reference date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub legal_work_hours: f64,
}

impl MonthCalendar {
    pub fn for_date(date: NaiveDate) -> Self {
        let days = days_in_month(date.year(), date.month());
        Self {
            year: date.year(),
            month: date.month(),
            days_in_month: days,
            legal_work_hours: legal_work_hours(days),
        }
    }

    /// First day of the month
    pub fn first_day(date: NaiveDate) -> NaiveDate {
        date - Duration::days(date.day0() as i64)
    }

    /// Last day of the month
    pub fn last_day(date: NaiveDate) -> NaiveDate {
        let days = days_in_month(date.year(), date.month());
        date + Duration::days(days as i64 - date.day() as i64)
    }
}
