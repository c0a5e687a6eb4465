//! Loosely typed request shape used by the JSON, Lambda and CLI front ends
//!
//! Field names follow the camelCase tool-call contract. Conversion into an
//! [`AssessmentInput`] is where malformed values are rejected.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::assessment::{AssessmentConfig, AssessmentInput, AssessmentOutput, WorkingDays};
use crate::error::InputError;

/// Assessment request as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    /// Hours worked up to yesterday
    pub total_work_hours_to_date: f64,

    /// Rest-day hours worked up to yesterday
    pub holiday_work_hours_to_date: f64,

    /// Ignored unless `auto_calculate_weekdays` is false
    #[serde(default)]
    pub working_days_elapsed: Option<u32>,

    /// Includes today. Ignored unless `auto_calculate_weekdays` is false
    #[serde(default)]
    pub working_days_remaining: Option<u32>,

    /// Reference date (YYYY-MM-DD); today when absent
    #[serde(default)]
    pub current_date: Option<String>,

    #[serde(default = "default_auto_calculate")]
    pub auto_calculate_weekdays: bool,

    #[serde(default)]
    pub config: Option<AssessmentConfig>,
}

fn default_auto_calculate() -> bool { true }

impl AssessmentRequest {
    pub fn new(total_work_hours_to_date: f64, holiday_work_hours_to_date: f64) -> Self {
        Self {
            total_work_hours_to_date,
            holiday_work_hours_to_date,
            working_days_elapsed: None,
            working_days_remaining: None,
            current_date: None,
            auto_calculate_weekdays: true,
            config: None,
        }
    }

    /// Validate and split into core input and threshold config
    pub fn into_input(self) -> Result<(AssessmentInput, AssessmentConfig), InputError> {
        check_hours("totalWorkHoursToDate", self.total_work_hours_to_date)?;
        check_hours("holidayWorkHoursToDate", self.holiday_work_hours_to_date)?;

        let reference_date = self.current_date.as_deref().map(parse_date).transpose()?;

        let config = self.config.unwrap_or_default();
        config.validate()?;

        let working_days = if self.auto_calculate_weekdays {
            if self.working_days_elapsed.is_some() || self.working_days_remaining.is_some() {
                debug!("autoCalculateWeekdays is set; ignoring supplied working-day counts");
            }
            WorkingDays::FromCalendar
        } else {
            WorkingDays::Manual {
                elapsed: self.working_days_elapsed.unwrap_or(0),
                remaining: self.working_days_remaining.unwrap_or(0),
            }
        };

        let input = AssessmentInput {
            total_work_hours_to_date: self.total_work_hours_to_date,
            holiday_work_hours_to_date: self.holiday_work_hours_to_date,
            working_days,
            reference_date,
        };

        Ok((input, config))
    }
}

/// Either an assessment or the reason the request was rejected
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<AssessmentOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssessmentResponse {
    pub fn ok(output: AssessmentOutput) -> Self {
        Self { output: Some(output), error: None }
    }

    pub fn rejected(error: &InputError) -> Self {
        Self { output: None, error: Some(error.to_string()) }
    }
}

/// Parse a strict YYYY-MM-DD calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, InputError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(InputError::DateFormat { value: value.to_string() });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| InputError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Hours in the longest month; no monthly figure can exceed it
pub const MAX_MONTHLY_HOURS: f64 = 31.0 * 24.0;

pub(crate) fn check_hours(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && (0.0..=MAX_MONTHLY_HOURS).contains(&value) {
        Ok(())
    } else {
        Err(InputError::InvalidHours { field, value })
    }
}
