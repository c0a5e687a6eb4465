//! Validated inputs for a single monthly assessment

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Default fraction of a limit at which the risk level becomes WARN
pub const DEFAULT_WARN_RATIO: f64 = 0.8;

/// How the elapsed/remaining working-day counts are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingDays {
    /// Counts supplied by the caller and used verbatim
    Manual {
        /// Working days already completed (before the reference date)
        elapsed: u32,
        /// Working days left in the month, including the reference date
        remaining: u32,
    },
    /// Counts derived from the calendar, Saturdays and Sundays excluded
    FromCalendar,
}

/// Hours and working-day mode for one employee and one month
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentInput {
    /// Hours worked so far this month, overtime and regular combined
    pub total_work_hours_to_date: f64,

    /// Hours worked on rest days so far this month
    pub holiday_work_hours_to_date: f64,

    pub working_days: WorkingDays,

    /// Day the assessment is anchored to; `None` means today
    pub reference_date: Option<NaiveDate>,
}

impl AssessmentInput {
    /// Input with calendar-derived working days
    pub fn from_calendar(total_work_hours_to_date: f64, holiday_work_hours_to_date: f64) -> Self {
        Self {
            total_work_hours_to_date,
            holiday_work_hours_to_date,
            working_days: WorkingDays::FromCalendar,
            reference_date: None,
        }
    }

    /// Input with caller-supplied working-day counts
    pub fn manual(
        total_work_hours_to_date: f64,
        holiday_work_hours_to_date: f64,
        elapsed: u32,
        remaining: u32,
    ) -> Self {
        Self {
            total_work_hours_to_date,
            holiday_work_hours_to_date,
            working_days: WorkingDays::Manual { elapsed, remaining },
            reference_date: None,
        }
    }

    pub fn on(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }
}

/// Threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentConfig {
    /// Fraction of a limit at which OK turns into WARN
    #[serde(default = "default_warn_ratio")]
    pub warn_ratio: f64,
}

fn default_warn_ratio() -> f64 { DEFAULT_WARN_RATIO }

impl AssessmentConfig {
    /// Warn ratio must be finite, above 0 and at most 1
    pub fn validate(&self) -> Result<(), InputError> {
        if self.warn_ratio.is_finite() && self.warn_ratio > 0.0 && self.warn_ratio <= 1.0 {
            Ok(())
        } else {
            Err(InputError::InvalidWarnRatio(self.warn_ratio))
        }
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            warn_ratio: DEFAULT_WARN_RATIO,
        }
    }
}
