//! Monthly overtime limit assessment and recovery planning

mod input;
mod projection;
mod recovery;
mod result;
mod engine;

pub use input::{AssessmentConfig, AssessmentInput, WorkingDays, DEFAULT_WARN_RATIO};
pub use projection::{average_daily_hours, resolve_working_days, MonthProjection, DEFAULT_DAILY_HOURS};
pub use recovery::{
    leave_days_for_daily_hours, recovery_options, round_hours, RecoveryParams, MAX_PAID_LEAVE_SCENARIOS,
    PAID_LEAVE_HOURS_PER_DAY,
};
pub use result::{AssessmentOutput, LimitAssessment, RecoveryOption, RiskLevel};
pub use engine::{applied_rules, assess_current_month, AssessmentEngine, LIMIT_45_HOURS, LIMIT_80_HOURS};
