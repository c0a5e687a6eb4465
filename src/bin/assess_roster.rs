//! Assess every employee in a roster CSV
//!
//! Writes one summary row per employee (projected figures, risk levels and
//! the paid leave needed to keep a standard working day) to a CSV file.

use anyhow::Context;
use clap::Parser;
use overtime_check::calendar::{Clock, SystemClock};
use overtime_check::request::parse_date;
use overtime_check::roster::{assess_roster, load_roster, write_results};
use overtime_check::{AssessmentConfig, AssessmentEngine, FixedClock, RiskLevel};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "assess-roster", about = "Assess a roster CSV against the 45h/80h limits")]
struct Args {
    /// Roster CSV (EmployeeId,TotalWorkHours,HolidayWorkHours[,WorkingDaysElapsed,WorkingDaysRemaining])
    roster: PathBuf,

    /// Reference date for every row (YYYY-MM-DD), today when omitted
    #[arg(long)]
    date: Option<String>,

    /// Output CSV path
    #[arg(long, default_value = "roster_assessment.csv")]
    output: PathBuf,

    /// Fraction of a limit at which the risk level becomes WARN
    #[arg(long, env = "OVERTIME_WARN_RATIO", default_value_t = 0.8)]
    warn_ratio: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let reference_date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => SystemClock.today(),
    };
    let config = AssessmentConfig { warn_ratio: args.warn_ratio };
    config.validate().context("invalid --warn-ratio")?;

    println!("Loading roster from {}...", args.roster.display());
    let entries = load_roster(&args.roster, reference_date)
        .with_context(|| format!("loading {}", args.roster.display()))?;
    println!("Loaded {} employees in {:?}", entries.len(), start.elapsed());

    let engine = AssessmentEngine::with_clock(config, FixedClock(reference_date));
    let results = assess_roster(&entries, &engine);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_results(file, &results)?;
    println!("Output written to {}", args.output.display());

    let count = |level: RiskLevel| results.iter().filter(|r| r.risk45.max(r.risk80) == level).count();
    println!("\nRoster Summary ({}):", reference_date);
    println!("  OK:    {}", count(RiskLevel::Ok));
    println!("  WARN:  {}", count(RiskLevel::Warn));
    println!("  LIMIT: {}", count(RiskLevel::Limit));
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
