//! AWS Lambda handler for single-month assessments
//!
//! Accepts an assessment request either as the raw invocation payload or, for
//! Lambda Function URLs, as the JSON string in the event's `body` field.
//! Rejected requests come back as `{"error": "..."}` rather than a failed
//! invocation.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use overtime_check::{AssessmentEngine, AssessmentRequest, AssessmentResponse};
use serde_json::Value;

/// Pull the request out of a direct invocation or a Function URL event
fn parse_request(payload: Value) -> Result<AssessmentRequest, serde_json::Error> {
    match payload.get("body").and_then(Value::as_str) {
        Some(body) => serde_json::from_str(body),
        None => serde_json::from_value(payload),
    }
}

async fn handler(event: LambdaEvent<Value>) -> Result<AssessmentResponse, Error> {
    let start = std::time::Instant::now();

    let request = match parse_request(event.payload) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("invalid request JSON: {}", e);
            return Ok(AssessmentResponse {
                output: None,
                error: Some(format!("Invalid JSON: {}", e)),
            });
        }
    };

    let response = match request.into_input() {
        Ok((input, config)) => {
            let output = AssessmentEngine::new(config).assess_current_month(&input);
            AssessmentResponse::ok(output)
        }
        Err(e) => AssessmentResponse::rejected(&e),
    };

    log::info!(
        "request {} handled in {:?}",
        event.context.request_id,
        start.elapsed()
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_direct_payload() {
        let payload = json!({"totalWorkHoursToDate": 100.0, "holidayWorkHoursToDate": 0.0});
        let request = parse_request(payload).unwrap();
        assert_eq!(request.total_work_hours_to_date, 100.0);
    }

    #[test]
    fn test_parse_function_url_body() {
        let payload = json!({
            "body": "{\"totalWorkHoursToDate\": 120.5, \"holidayWorkHoursToDate\": 4.0, \"currentDate\": \"2025-04-15\"}",
            "isBase64Encoded": false
        });
        let request = parse_request(payload).unwrap();
        assert_eq!(request.total_work_hours_to_date, 120.5);
        assert_eq!(request.current_date.as_deref(), Some("2025-04-15"));
    }

    #[test]
    fn test_parse_rejects_missing_hours() {
        assert!(parse_request(json!({"holidayWorkHoursToDate": 0.0})).is_err());
    }
}
