//! Overtime Check - monthly Article 36 agreement limit assessment
//!
//! This library provides:
//! - Calendar facts: month length, statutory monthly hours, weekday accounting
//! - Month-end projection of overtime + holiday work from the pace so far
//! - Risk classification against the 45h limit and the 80h guideline
//! - Paid-leave recovery plans that bring a projected breach back under the limit
//! - Request validation and CSV roster batch assessment

pub mod calendar;
pub mod assessment;
pub mod error;
pub mod request;
pub mod roster;

// Re-export commonly used types
pub use calendar::{Clock, FixedClock, SystemClock, MonthCalendar};
pub use assessment::{
    AssessmentConfig, AssessmentEngine, AssessmentInput, AssessmentOutput, LimitAssessment,
    RecoveryOption, RiskLevel, WorkingDays,
};
pub use error::{InputError, RosterError};
pub use request::{AssessmentRequest, AssessmentResponse};
