//! Integration tests for common fieldcheck workflows.
//!
//! These exercise the facade the way an application boundary would: decode a
//! body, let the record validate itself, and answer with a status and body.

use chrono::{DateTime, Months, TimeZone, Utc};
use fieldcheck::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SignUp {
    name: String,
    dob: DateTime<Utc>,
    is_enabled: bool,
    count: i32,
}

impl Validate for SignUp {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let cutoff = Utc::now() - Months::new(16 * 12);
        ValidationErrors::new()
            .validate("name", [str_length(&self.name, 4, 10)])
            .validate("dob", [not_empty(&self.dob), date_before(self.dob, cutoff)])
            .validate("isEnabled", [equal(self.is_enabled, false)])
            .validate("count", [positive_number(self.count)])
            .into_result()
    }
}

fn body(count: i32, is_enabled: bool) -> Vec<u8> {
    serde_json::json!({
        "name": "My Name",
        "dob": Utc.with_ymd_and_hms(2000, 10, 12, 0, 0, 0).unwrap(),
        "isEnabled": is_enabled,
        "count": count,
    })
    .to_string()
    .into_bytes()
}

// =============================================================================
// Request handling
// =============================================================================

#[test]
fn test_valid_request_gets_200() {
    let response = ValidationPipe::respond::<SignUp>(&body(1, false));
    assert_eq!(response.status, 200);
    assert!(response.body.is_empty());
}

#[test]
fn test_invalid_request_gets_400_with_errors() {
    let response = ValidationPipe::respond::<SignUp>(&body(0, true));
    assert_eq!(response.status, 400);

    let json: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "errors": {
                "count": ["value 0 should be greater than 0"],
                "isEnabled": ["value true does not evaluate to false"],
            }
        })
    );
    assert_eq!(
        response.body_str(),
        Some(
            r#"{"errors":{"count":["value 0 should be greater than 0"],"isEnabled":["value true does not evaluate to false"]}}"#
        )
    );
}

#[test]
fn test_handler_with_question_mark() {
    fn handle(raw: &[u8]) -> Result<String, PipeError> {
        let signup: SignUp = ValidationPipe::parse(raw)?;
        Ok(signup.name)
    }

    assert_eq!(handle(&body(2, false)).unwrap(), "My Name");

    let err = handle(&body(2, true)).unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(
        err.to_string(),
        "[isEnabled: value true does not evaluate to false]"
    );
}

#[test]
fn test_empty_object_fails_every_field_but_is_enabled() {
    let err = ValidationPipe::parse::<SignUp>(b"{}").unwrap_err();
    let PipeError::Invalid(errors) = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec!["count", "dob", "name"]
    );
}

// =============================================================================
// Caller-chosen halting policy
// =============================================================================

#[test]
fn test_warn_and_continue() {
    let mut warnings = Vec::new();
    let total = 3;

    let report = ValidationErrors::new().validate("amount", [min_number(total, 10)]);
    if !report.is_valid() {
        warnings.push(report.render());
    }

    // processing carries on regardless
    let processed = total * 2;
    assert_eq!(processed, 6);
    assert_eq!(warnings, vec!["[amount: value 3 is smaller than minimum 10]"]);
}

#[test]
fn test_wrapping_upstream_errors() {
    let upstream: Result<u32, std::num::ParseIntError> = "abc".parse::<u32>();
    let report = ValidationErrors::from_error("quantity", upstream.err()).unwrap();
    assert_eq!(
        report.to_string(),
        "[quantity: invalid digit found in string]"
    );
}
