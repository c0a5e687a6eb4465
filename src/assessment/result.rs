//! Output structures for an assessment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk of reaching a limit by month end
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Safely under the warning threshold
    Ok,
    /// Within `warn_ratio` of the limit
    Warn,
    /// At or projected over the limit
    Limit,
}

impl RiskLevel {
    /// Classify a projected overtime+holiday figure against a limit
    pub fn classify(projected: f64, limit: f64, warn_ratio: f64) -> Self {
        if projected >= limit {
            RiskLevel::Limit
        } else if projected >= limit * warn_ratio {
            RiskLevel::Warn
        } else {
            RiskLevel::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Ok => "OK",
            RiskLevel::Warn => "WARN",
            RiskLevel::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hypothetical schedule that keeps the month within a limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryOption {
    pub paid_leave_days: u32,

    /// Ceiling on hours per remaining working day, rounded to 2 decimals
    pub max_daily_work_hours: f64,

    pub description: String,
}

/// Evaluation against one limit (45h or 80h)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitAssessment {
    pub limit: f64,
    pub total_work_hours_to_date: f64,
    pub projected_total_work_hours: f64,
    pub projected_overtime_and_holiday_hours: f64,

    /// limit - projected overtime+holiday; negative means a projected breach
    pub remaining_to_limit: f64,

    pub risk_level: RiskLevel,

    /// Ascending by paid-leave days
    pub recovery_options: Vec<RecoveryOption>,
}

impl LimitAssessment {
    pub fn is_breach_projected(&self) -> bool {
        self.risk_level == RiskLevel::Limit
    }
}

/// Complete assessment result for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutput {
    pub evaluation45: LimitAssessment,
    pub evaluation80: LimitAssessment,
    pub applied_rules: Vec<String>,
}

impl AssessmentOutput {
    /// Higher of the two risk levels
    pub fn worst_risk(&self) -> RiskLevel {
        self.evaluation45.risk_level.max(self.evaluation80.risk_level)
    }

    pub fn evaluations(&self) -> [&LimitAssessment; 2] {
        [&self.evaluation45, &self.evaluation80]
    }
}
