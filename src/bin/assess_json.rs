//! Assess a single JSON request
//!
//! Reads an assessment request (camelCase fields) from the file given as the
//! first argument, or from stdin, and writes `{"output": ...}` to stdout.
//! Invalid requests produce `{"error": "..."}` and a non-zero exit code.
//! Set WARN_RATIO to override the request's warn ratio.

use anyhow::Context;
use overtime_check::{AssessmentEngine, AssessmentRequest, AssessmentResponse};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let raw = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let mut request: AssessmentRequest =
        serde_json::from_str(&raw).context("request is not a valid assessment JSON object")?;

    if let Ok(value) = env::var("WARN_RATIO") {
        let warn_ratio: f64 = value.parse().context("WARN_RATIO must be a number")?;
        let mut config = request.config.unwrap_or_default();
        config.warn_ratio = warn_ratio;
        request.config = Some(config);
    }

    let (response, code) = match request.into_input() {
        Ok((input, config)) => {
            let output = AssessmentEngine::new(config).assess_current_month(&input);
            log::info!("worst risk level: {}", output.worst_risk());
            (AssessmentResponse::ok(output), ExitCode::SUCCESS)
        }
        Err(err) => {
            log::error!("rejected request: {}", err);
            (AssessmentResponse::rejected(&err), ExitCode::FAILURE)
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(code)
}
