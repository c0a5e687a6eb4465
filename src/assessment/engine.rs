//! Assessment engine: projects the month and evaluates both limits

use log::{debug, warn};

use super::input::{AssessmentConfig, AssessmentInput};
use super::projection::MonthProjection;
use super::recovery::{recovery_options, RecoveryParams};
use super::result::{AssessmentOutput, LimitAssessment, RiskLevel};
use crate::calendar::{Clock, MonthCalendar, SystemClock};

/// Monthly overtime + holiday work ceiling
pub const LIMIT_45_HOURS: f64 = 45.0;

/// Overtime + holiday work guideline evaluated on a single month
pub const LIMIT_80_HOURS: f64 = 80.0;

/// Evaluates a month against both limits
///
/// # Example
/// ```ignore
/// let engine = AssessmentEngine::with_clock(AssessmentConfig::default(), FixedClock(date));
/// let output = engine.assess_current_month(&AssessmentInput::from_calendar(150.0, 8.0));
/// for option in &output.evaluation45.recovery_options {
///     println!("{}", option.description);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AssessmentEngine<C = SystemClock> {
    config: AssessmentConfig,
    clock: C,
}

impl AssessmentEngine<SystemClock> {
    /// Engine that defaults the reference date to the local date
    pub fn new(config: AssessmentConfig) -> Self {
        Self { config, clock: SystemClock }
    }
}

impl Default for AssessmentEngine<SystemClock> {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

impl<C: Clock> AssessmentEngine<C> {
    pub fn with_clock(config: AssessmentConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Month-end projection, anchored to today when the input has no reference date
    pub fn project(&self, input: &AssessmentInput) -> MonthProjection {
        let reference_date = input.reference_date.unwrap_or_else(|| self.clock.today());
        MonthProjection::project(input, reference_date)
    }

    /// Project the month containing the reference date and evaluate the 45h and 80h limits
    pub fn assess_current_month(&self, input: &AssessmentInput) -> AssessmentOutput {
        let projection = self.project(input);
        let reference_date = projection.reference_date;

        debug!(
            "{}: {} elapsed / {} remaining working days, pace {:.2}h, projected total {:.2}h, overtime+holiday {:.2}h",
            reference_date,
            projection.working_days_elapsed,
            projection.working_days_remaining,
            projection.average_daily_hours,
            projection.projected_total_hours,
            projection.projected_overtime_and_holiday,
        );

        let evaluation45 = self.assess_limit(LIMIT_45_HOURS, input, &projection);
        let evaluation80 = self.assess_limit(LIMIT_80_HOURS, input, &projection);

        AssessmentOutput {
            evaluation45,
            evaluation80,
            applied_rules: applied_rules(&projection.calendar),
        }
    }

    fn assess_limit(
        &self,
        limit: f64,
        input: &AssessmentInput,
        projection: &MonthProjection,
    ) -> LimitAssessment {
        let projected = projection.projected_overtime_and_holiday;
        let risk_level = RiskLevel::classify(projected, limit, self.config.warn_ratio);

        if risk_level == RiskLevel::Limit {
            warn!(
                "{:.0}h limit projected to be exceeded: {:.2}h overtime+holiday",
                limit, projected
            );
        }

        let params = RecoveryParams::for_limit(limit, input, projection);

        LimitAssessment {
            limit,
            total_work_hours_to_date: input.total_work_hours_to_date,
            projected_total_work_hours: projection.projected_total_hours,
            projected_overtime_and_holiday_hours: projected,
            remaining_to_limit: limit - projected,
            risk_level,
            recovery_options: recovery_options(&params),
        }
    }
}

/// One-shot assessment without constructing an engine
pub fn assess_current_month<C: Clock>(
    input: &AssessmentInput,
    config: &AssessmentConfig,
    clock: C,
) -> AssessmentOutput {
    AssessmentEngine::with_clock(*config, clock).assess_current_month(input)
}

/// Rules the evaluation applied; the last entry states the statutory baseline
pub fn applied_rules(calendar: &MonthCalendar) -> Vec<String> {
    vec![
        "Policy: both the 45h and 80h evaluations use overtime + holiday work (conservative)".to_string(),
        "Monthly 45-hour limit (overtime + holiday work)".to_string(),
        "80-hour guideline (overtime + holiday work, single-month simplified evaluation)".to_string(),
        format!(
            "Statutory monthly working hours: {:.1}h ({}-day month)",
            calendar.legal_work_hours, calendar.days_in_month
        ),
    ]
}
