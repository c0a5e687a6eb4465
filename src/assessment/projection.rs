//! Month-end projection by linear extrapolation of the pace so far

use chrono::NaiveDate;

use super::input::{AssessmentInput, WorkingDays};
use crate::calendar::{elapsed_weekdays_in_month, remaining_weekdays_in_month, MonthCalendar};

/// Assumed daily pace when no working days have elapsed yet
pub const DEFAULT_DAILY_HOURS: f64 = 8.0;

/// Figures shared by both limit evaluations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthProjection {
    pub reference_date: NaiveDate,
    pub calendar: MonthCalendar,
    pub working_days_elapsed: u32,
    pub working_days_remaining: u32,
    pub average_daily_hours: f64,
    pub projected_total_hours: f64,
    /// Projected total minus the statutory monthly hours
    pub projected_overtime: f64,
    /// Projected overtime plus holiday hours already worked
    pub projected_overtime_and_holiday: f64,
}

impl MonthProjection {
    pub fn project(input: &AssessmentInput, reference_date: NaiveDate) -> Self {
        let calendar = MonthCalendar::for_date(reference_date);
        let (elapsed, remaining) = resolve_working_days(input.working_days, reference_date);

        let average_daily_hours = average_daily_hours(input.total_work_hours_to_date, elapsed);
        let projected_total_hours =
            input.total_work_hours_to_date + remaining as f64 * average_daily_hours;
        let projected_overtime = projected_total_hours - calendar.legal_work_hours;

        Self {
            reference_date,
            calendar,
            working_days_elapsed: elapsed,
            working_days_remaining: remaining,
            average_daily_hours,
            projected_total_hours,
            projected_overtime,
            projected_overtime_and_holiday: projected_overtime + input.holiday_work_hours_to_date,
        }
    }
}

/// (elapsed, remaining) working days for the chosen mode
pub fn resolve_working_days(mode: WorkingDays, reference_date: NaiveDate) -> (u32, u32) {
    match mode {
        WorkingDays::Manual { elapsed, remaining } => (elapsed, remaining),
        WorkingDays::FromCalendar => (
            elapsed_weekdays_in_month(reference_date),
            remaining_weekdays_in_month(reference_date),
        ),
    }
}

/// Hours per elapsed working day, or the default pace at month start
pub fn average_daily_hours(total_hours: f64, elapsed_days: u32) -> f64 {
    if elapsed_days == 0 {
        DEFAULT_DAILY_HOURS
    } else {
        total_hours / elapsed_days as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_average_daily_hours() {
        assert_relative_eq!(average_daily_hours(100.0, 10), 10.0);
        assert_relative_eq!(average_daily_hours(0.0, 0), DEFAULT_DAILY_HOURS);
        assert_relative_eq!(average_daily_hours(37.5, 0), DEFAULT_DAILY_HOURS);
    }

    #[test]
    fn test_manual_projection() {
        let input = AssessmentInput::manual(124.0, 6.0, 12, 8);
        let projection = MonthProjection::project(&input, date(2025, 4, 18));

        assert_eq!(projection.working_days_elapsed, 12);
        assert_eq!(projection.working_days_remaining, 8);
        // 124 + 8 * 10.333
        assert_relative_eq!(projection.projected_total_hours, 206.666_667, epsilon = 1e-5);
        assert_relative_eq!(projection.projected_overtime, 35.238_095, epsilon = 1e-5);
        assert_relative_eq!(projection.projected_overtime_and_holiday, 41.238_095, epsilon = 1e-5);
    }

    #[test]
    fn test_calendar_and_manual_working_days() {
        // Saturday 2025-10-25: 18 weekdays before, 5 from today on
        let mut input = AssessmentInput::from_calendar(150.0, 0.0);
        let projection = MonthProjection::project(&input, date(2025, 10, 25));
        assert_eq!(projection.working_days_elapsed, 18);
        assert_eq!(projection.working_days_remaining, 5);

        input.working_days = WorkingDays::Manual { elapsed: 17, remaining: 7 };
        let manual = MonthProjection::project(&input, date(2025, 10, 25));
        assert_eq!(manual.working_days_elapsed, 17);
        assert_eq!(manual.working_days_remaining, 7);
    }

    #[test]
    fn test_zero_elapsed_uses_default_pace() {
        let input = AssessmentInput::manual(0.0, 0.0, 0, 20);
        let projection = MonthProjection::project(&input, date(2025, 4, 1));
        assert_relative_eq!(projection.projected_total_hours, 160.0);
        assert!(projection.projected_overtime_and_holiday.is_finite());
        assert!(projection.projected_overtime_and_holiday < 0.0);
    }
}
