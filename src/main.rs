//! Overtime Check CLI
//!
//! Command-line interface for assessing one employee's month against the
//! 45h limit and the 80h guideline

use anyhow::Context;
use clap::Parser;
use overtime_check::{
    AssessmentConfig, AssessmentEngine, AssessmentOutput, AssessmentRequest, LimitAssessment,
};

#[derive(Parser, Debug)]
#[command(name = "overtime-check", version, about = "Project this month's overtime + holiday work and plan paid-leave recovery")]
struct Args {
    /// Hours worked so far this month (up to yesterday)
    #[arg(long)]
    total_hours: f64,

    /// Rest-day hours worked so far this month
    #[arg(long, default_value_t = 0.0)]
    holiday_hours: f64,

    /// Working days already completed; omit both counts to derive them from the calendar
    #[arg(long, requires = "remaining")]
    elapsed: Option<u32>,

    /// Working days left including today
    #[arg(long, requires = "elapsed")]
    remaining: Option<u32>,

    /// Reference date (YYYY-MM-DD), today when omitted
    #[arg(long)]
    date: Option<String>,

    /// Fraction of a limit at which the risk level becomes WARN
    #[arg(long, env = "OVERTIME_WARN_RATIO", default_value_t = 0.8)]
    warn_ratio: f64,

    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_request(&self) -> AssessmentRequest {
        AssessmentRequest {
            total_work_hours_to_date: self.total_hours,
            holiday_work_hours_to_date: self.holiday_hours,
            working_days_elapsed: self.elapsed,
            working_days_remaining: self.remaining,
            current_date: self.date.clone(),
            auto_calculate_weekdays: self.elapsed.is_none() && self.remaining.is_none(),
            config: Some(AssessmentConfig { warn_ratio: self.warn_ratio }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (input, config) = args.to_request().into_input().context("invalid assessment input")?;
    let engine = AssessmentEngine::new(config);
    let output = engine.assess_current_month(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&output);
    }

    Ok(())
}

fn print_report(output: &AssessmentOutput) {
    println!("Overtime Check v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    for eval in output.evaluations() {
        print_evaluation(eval);
    }

    println!("Applied rules:");
    for rule in &output.applied_rules {
        println!("  - {}", rule);
    }
}

fn print_evaluation(eval: &LimitAssessment) {
    println!("{:.0}h limit: {}", eval.limit, eval.risk_level);
    println!("  Hours to date:            {:>8.2}", eval.total_work_hours_to_date);
    println!("  Projected total:          {:>8.2}", eval.projected_total_work_hours);
    println!("  Projected OT + holiday:   {:>8.2}", eval.projected_overtime_and_holiday_hours);
    println!("  Remaining to limit:       {:>8.2}", eval.remaining_to_limit);

    println!("  {:>10} {:>14}  {}", "PaidLeave", "MaxDailyHours", "Plan");
    println!("  {}", "-".repeat(70));
    for option in &eval.recovery_options {
        println!(
            "  {:>10} {:>14.2}  {}",
            option.paid_leave_days, option.max_daily_work_hours, option.description
        );
    }
    println!();
}
