//! Paid-leave recovery search
//!
//! For each candidate number of paid-leave days, finds the highest constant
//! daily rate on the remaining working days that keeps overtime + holiday
//! work at or under the limit. A paid-leave day removes one working day and
//! its scheduled hours from the month.

use super::input::AssessmentInput;
use super::projection::MonthProjection;
use super::result::RecoveryOption;

/// Scheduled hours a single paid-leave day takes off the month
pub const PAID_LEAVE_HOURS_PER_DAY: f64 = 8.0;

/// Most paid-leave days considered (0 through 5)
pub const MAX_PAID_LEAVE_SCENARIOS: u32 = 6;

/// Figures the search needs for one limit
#[derive(Debug, Clone, Copy)]
pub struct RecoveryParams {
    pub limit: f64,
    pub total_work_hours_to_date: f64,
    pub holiday_work_hours_to_date: f64,
    pub legal_work_hours: f64,
    pub working_days_remaining: u32,
    /// Pre-recovery projection; under the limit means only the no-leave option is produced
    pub projected_overtime_and_holiday: f64,
}

impl RecoveryParams {
    pub fn for_limit(limit: f64, input: &AssessmentInput, projection: &MonthProjection) -> Self {
        Self {
            limit,
            total_work_hours_to_date: input.total_work_hours_to_date,
            holiday_work_hours_to_date: input.holiday_work_hours_to_date,
            legal_work_hours: projection.calendar.legal_work_hours,
            working_days_remaining: projection.working_days_remaining,
            projected_overtime_and_holiday: projection.projected_overtime_and_holiday,
        }
    }

    /// Hours still available for the rest of the month before any leave is taken
    ///
    /// Holiday hours already worked come out of the limit first.
    pub fn remaining_possible_hours(&self) -> f64 {
        let allowed_overtime = self.limit - self.holiday_work_hours_to_date;
        let target_total_hours = self.legal_work_hours + allowed_overtime;
        target_total_hours - self.total_work_hours_to_date
    }
}

/// Fewest paid-leave days (0 through 5) that leave at least `daily_hours` for
/// every remaining working day, whatever the current risk level
///
/// `None` when no considered leave count allows it, including months with no
/// working days left.
pub fn leave_days_for_daily_hours(params: &RecoveryParams, daily_hours: f64) -> Option<u32> {
    let remaining_possible = params.remaining_possible_hours();
    let scenarios = MAX_PAID_LEAVE_SCENARIOS.min(params.working_days_remaining.saturating_add(1));

    (0..scenarios).find(|&paid_leave_days| {
        let actual_working_days = params.working_days_remaining - paid_leave_days;
        let hours_after_leave = remaining_possible + paid_leave_days as f64 * PAID_LEAVE_HOURS_PER_DAY;
        actual_working_days > 0 && hours_after_leave >= daily_hours * actual_working_days as f64
    })
}

/// Build the ordered recovery options for one limit
pub fn recovery_options(params: &RecoveryParams) -> Vec<RecoveryOption> {
    let mut options = Vec::new();
    let remaining_possible = params.remaining_possible_hours();
    let scenarios = MAX_PAID_LEAVE_SCENARIOS.min(params.working_days_remaining.saturating_add(1));

    for paid_leave_days in 0..scenarios {
        let actual_working_days = params.working_days_remaining as i64 - paid_leave_days as i64;
        let hours_after_leave = remaining_possible + paid_leave_days as f64 * PAID_LEAVE_HOURS_PER_DAY;

        if actual_working_days <= 0 {
            if hours_after_leave < 0.0 {
                if paid_leave_days == 0 {
                    options.push(already_exceeded(remaining_possible.abs()));
                }
            } else {
                options.push(all_days_on_leave(paid_leave_days));
            }
            break;
        }

        let max_daily = round_hours((hours_after_leave / actual_working_days as f64).max(0.0));
        options.push(RecoveryOption {
            paid_leave_days,
            max_daily_work_hours: max_daily,
            description: describe_rate(paid_leave_days, actual_working_days as u32, max_daily),
        });

        if paid_leave_days == 0 && params.projected_overtime_and_holiday < params.limit {
            break;
        }
    }

    options
}

/// Round to 2 decimal places
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

fn leave_label(paid_leave_days: u32) -> String {
    match paid_leave_days {
        0 => "No paid leave".to_string(),
        1 => "1 day of paid leave".to_string(),
        n => format!("{} days of paid leave", n),
    }
}

fn describe_rate(paid_leave_days: u32, working_days: u32, max_daily: f64) -> String {
    format!(
        "{}: {} working day{} left, at most {:.2} hours per day",
        leave_label(paid_leave_days),
        working_days,
        if working_days == 1 { "" } else { "s" },
        max_daily,
    )
}

fn already_exceeded(overage: f64) -> RecoveryOption {
    RecoveryOption {
        paid_leave_days: 0,
        max_daily_work_hours: 0.0,
        description: format!(
            "{}: no working days left. Already {:.2} hours over the limit.",
            leave_label(0),
            overage,
        ),
    }
}

fn all_days_on_leave(paid_leave_days: u32) -> RecoveryOption {
    RecoveryOption {
        paid_leave_days,
        max_daily_work_hours: 0.0,
        description: format!(
            "{}: no working days left. This keeps the month within the limit.",
            leave_label(paid_leave_days),
        ),
    }
}
