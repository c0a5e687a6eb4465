//! Assess a whole roster from CSV
//!
//! Input columns: EmployeeId, TotalWorkHours, HolidayWorkHours and the
//! optional WorkingDaysElapsed / WorkingDaysRemaining. Rows without either
//! count use calendar-derived working days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::assessment::{
    leave_days_for_daily_hours, round_hours, AssessmentEngine, AssessmentInput, RecoveryParams,
    RiskLevel, WorkingDays, DEFAULT_DAILY_HOURS, LIMIT_45_HOURS,
};
use crate::calendar::Clock;
use crate::error::RosterError;
use crate::request::check_hours;

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "EmployeeId")]
    employee_id: String,
    #[serde(rename = "TotalWorkHours")]
    total_work_hours: f64,
    #[serde(rename = "HolidayWorkHours")]
    holiday_work_hours: f64,
    #[serde(rename = "WorkingDaysElapsed", default)]
    working_days_elapsed: Option<u32>,
    #[serde(rename = "WorkingDaysRemaining", default)]
    working_days_remaining: Option<u32>,
}

impl CsvRow {
    fn into_entry(self, line: u64, reference_date: NaiveDate) -> Result<RosterEntry, RosterError> {
        let row_error = |source| RosterError::Row {
            line,
            employee_id: self.employee_id.clone(),
            source,
        };
        check_hours("TotalWorkHours", self.total_work_hours).map_err(row_error)?;
        check_hours("HolidayWorkHours", self.holiday_work_hours).map_err(row_error)?;

        let working_days = match (self.working_days_elapsed, self.working_days_remaining) {
            (None, None) => WorkingDays::FromCalendar,
            (elapsed, remaining) => WorkingDays::Manual {
                elapsed: elapsed.unwrap_or(0),
                remaining: remaining.unwrap_or(0),
            },
        };

        Ok(RosterEntry {
            employee_id: self.employee_id,
            input: AssessmentInput {
                total_work_hours_to_date: self.total_work_hours,
                holiday_work_hours_to_date: self.holiday_work_hours,
                working_days,
                reference_date: Some(reference_date),
            },
        })
    }
}

/// One employee's validated input
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub employee_id: String,
    pub input: AssessmentInput,
}

/// Load a roster file, anchoring every row to `reference_date`
pub fn load_roster(path: &Path, reference_date: NaiveDate) -> Result<Vec<RosterEntry>, RosterError> {
    let file = File::open(path)?;
    read_roster(file, reference_date)
}

pub fn read_roster<R: io::Read>(
    reader: R,
    reference_date: NaiveDate,
) -> Result<Vec<RosterEntry>, RosterError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut entries = Vec::new();

    while reader.read_record(&mut record)? {
        // Quoted fields may span lines, so take the line the record starts on
        let line = record.position().map_or(0, |pos| pos.line());
        let row: CsvRow = record.deserialize(Some(&headers))?;
        entries.push(row.into_entry(line, reference_date)?);
    }

    Ok(entries)
}

/// Per-employee summary written back out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterResult {
    #[serde(rename = "EmployeeId")]
    pub employee_id: String,
    #[serde(rename = "ProjectedTotalHours")]
    pub projected_total_hours: f64,
    #[serde(rename = "ProjectedOvertimeAndHoliday")]
    pub projected_overtime_and_holiday: f64,
    #[serde(rename = "Risk45")]
    pub risk45: RiskLevel,
    #[serde(rename = "RemainingTo45")]
    pub remaining_to45: f64,
    #[serde(rename = "Risk80")]
    pub risk80: RiskLevel,
    #[serde(rename = "RemainingTo80")]
    pub remaining_to80: f64,
    /// Daily ceiling under the 45h limit with no paid leave
    #[serde(rename = "MaxDailyHours45")]
    pub max_daily_hours45: Option<f64>,
    /// Fewest paid-leave days that still allow a standard working day under 45h
    #[serde(rename = "LeaveDaysForStandardDay45")]
    pub leave_days_for_standard_day45: Option<u32>,
}

/// Assess every entry with the same engine, in roster order
pub fn assess_roster<C: Clock>(
    entries: &[RosterEntry],
    engine: &AssessmentEngine<C>,
) -> Vec<RosterResult> {
    entries
        .iter()
        .map(|entry| {
            let output = engine.assess_current_month(&entry.input);
            let eval45 = &output.evaluation45;
            let projection = engine.project(&entry.input);
            let params45 = RecoveryParams::for_limit(LIMIT_45_HOURS, &entry.input, &projection);
            RosterResult {
                employee_id: entry.employee_id.clone(),
                projected_total_hours: round_hours(eval45.projected_total_work_hours),
                projected_overtime_and_holiday: round_hours(eval45.projected_overtime_and_holiday_hours),
                risk45: eval45.risk_level,
                remaining_to45: round_hours(eval45.remaining_to_limit),
                risk80: output.evaluation80.risk_level,
                remaining_to80: round_hours(output.evaluation80.remaining_to_limit),
                max_daily_hours45: eval45.recovery_options.first().map(|o| o.max_daily_work_hours),
                leave_days_for_standard_day45: leave_days_for_daily_hours(&params45, DEFAULT_DAILY_HOURS),
            }
        })
        .collect()
}

pub fn write_results<W: io::Write>(writer: W, results: &[RosterResult]) -> Result<(), RosterError> {
    let mut writer = csv::Writer::from_writer(writer);
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentConfig;
    use crate::calendar::FixedClock;
    use crate::error::InputError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ROSTER: &str = "\
EmployeeId,TotalWorkHours,HolidayWorkHours,WorkingDaysElapsed,WorkingDaysRemaining
E001,100.0,0.0,10,10
E002,150.5,8.0,15,8
E003,150.0,0.0,,
";

    #[test]
    fn test_read_roster() {
        let entries = read_roster(ROSTER.as_bytes(), date(2025, 4, 18)).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].employee_id, "E001");
        assert_eq!(entries[0].input.working_days, WorkingDays::Manual { elapsed: 10, remaining: 10 });
        assert_eq!(entries[2].input.working_days, WorkingDays::FromCalendar);
        assert!(entries.iter().all(|e| e.input.reference_date == Some(date(2025, 4, 18))));
    }

    #[test]
    fn test_rejects_negative_hours_with_line() {
        let csv = "EmployeeId,TotalWorkHours,HolidayWorkHours\nE001,10.0,0.0\nE002,-3.0,0.0\n";
        match read_roster(csv.as_bytes(), date(2025, 4, 18)) {
            Err(RosterError::Row { line, employee_id, source }) => {
                assert_eq!(line, 3);
                assert_eq!(employee_id, "E002");
                assert!(matches!(source, InputError::InvalidHours { field: "TotalWorkHours", .. }));
            }
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_row_error_line_after_multiline_field() {
        let csv = "EmployeeId,TotalWorkHours,HolidayWorkHours\n\"E001\nnight shift\",10.0,0.0\nE002,-3.0,0.0\n";
        match read_roster(csv.as_bytes(), date(2025, 4, 18)) {
            Err(RosterError::Row { line, employee_id, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(employee_id, "E002");
            }
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unparsable_number() {
        let csv = "EmployeeId,TotalWorkHours,HolidayWorkHours\nE001,lots,0.0\n";
        assert!(matches!(
            read_roster(csv.as_bytes(), date(2025, 4, 18)),
            Err(RosterError::Csv(_))
        ));
    }

    #[test]
    fn test_assess_and_write_roster() {
        let entries = read_roster(ROSTER.as_bytes(), date(2025, 4, 18)).unwrap();
        let engine = AssessmentEngine::with_clock(AssessmentConfig::default(), FixedClock(date(2025, 4, 18)));
        let results = assess_roster(&entries, &engine);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].risk45, RiskLevel::Ok);
        assert_eq!(results[1].risk45, RiskLevel::Limit);
        assert_eq!(results[1].risk80, RiskLevel::Warn);
        assert!(results[1].remaining_to45 < 0.0);
        // 57.93h left over 8 days is 7.24h/day; one day of leave lifts it to 9.42h
        assert_eq!(results[1].max_daily_hours45, Some(7.24));
        assert_eq!(results[1].leave_days_for_standard_day45, Some(1));

        // Compliant rows still report their leave needs
        assert_eq!(results[0].max_daily_hours45, Some(11.64));
        assert_eq!(results[0].leave_days_for_standard_day45, Some(0));

        let mut out = Vec::new();
        write_results(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("EmployeeId,ProjectedTotalHours,ProjectedOvertimeAndHoliday,Risk45,RemainingTo45,Risk80,RemainingTo80,MaxDailyHours45,LeaveDaysForStandardDay45")
        );
        assert!(lines.nth(1).unwrap().starts_with("E002,230.77,67.34,LIMIT,-22.34,WARN,12.66,7.24,1"));
    }

    #[test]
    fn test_leave_days_reported_for_warn_row() {
        let csv = "EmployeeId,TotalWorkHours,HolidayWorkHours,WorkingDaysElapsed,WorkingDaysRemaining\nE9,140.0,0.0,20,10\n";
        let entries = read_roster(csv.as_bytes(), date(2025, 4, 20)).unwrap();
        let engine = AssessmentEngine::with_clock(AssessmentConfig::default(), FixedClock(date(2025, 4, 20)));
        let results = assess_roster(&entries, &engine);

        // 38.57h projected: WARN, 76.43h left over 10 days
        assert_eq!(results[0].risk45, RiskLevel::Warn);
        assert_eq!(results[0].max_daily_hours45, Some(7.64));
        // One day of leave: 84.43h over 9 days
        assert_eq!(results[0].leave_days_for_standard_day45, Some(1));

        let mut out = Vec::new();
        write_results(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",7.64,1"));
    }
}
