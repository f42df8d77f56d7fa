//! Integration tests for fieldcheck-core

use chrono::{DateTime, Months, TimeZone, Utc};
use fieldcheck_core::*;
use regex::Regex;

struct Request {
    name: String,
    dob: DateTime<Utc>,
    is_enabled: bool,
    count: i32,
}

impl Validate for Request {
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

fn request(count: i32, is_enabled: bool) -> Request {
    Request {
        name: "My Name".to_string(),
        dob: Utc.with_ymd_and_hms(2000, 10, 12, 0, 0, 0).unwrap(),
        is_enabled,
        count,
    }
}

#[test]
fn test_valid_request() {
    assert!(request(1, false).validate().is_ok());
}

#[test]
fn test_invalid_request_reports_two_fields() {
    let errors = request(0, true).validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get("count"),
        Some(&["value 0 should be greater than 0".to_string()][..])
    );
    assert_eq!(
        errors.get("isEnabled"),
        Some(&["value true does not evaluate to false".to_string()][..])
    );
    assert!(!errors.contains("name"));
    assert!(!errors.contains("dob"));
}

#[test]
fn test_unset_dob_is_empty() {
    let mut req = request(1, false);
    req.dob = DateTime::<Utc>::default();
    let errors = req.validate().unwrap_err();
    // the epoch is empty, but it is also comfortably in the past
    assert_eq!(
        errors.get("dob"),
        Some(&["value cannot be empty".to_string()][..])
    );
}

#[test]
fn test_too_young() {
    let mut req = request(1, false);
    req.dob = Utc::now();
    let errors = req.validate().unwrap_err();
    let messages = errors.get("dob").unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("the date provided "));
}

#[test]
fn test_json_body() {
    let errors = request(0, true).validate().unwrap_err();
    assert_eq!(
        serde_json::to_string(&errors.to_json()).unwrap(),
        r#"{"errors":{"count":["value 0 should be greater than 0"],"isEnabled":["value true does not evaluate to false"]}}"#
    );
}

#[test]
fn test_many_checks_on_one_field() {
    let postcode = "bt13 4GH";
    let pattern = Regex::new(r"^[a-zA-Z0-9 ]+$").unwrap();
    let report = ValidationErrors::new().validate(
        "postcode",
        [
            not_empty(postcode),
            str_length(postcode, 5, 8),
            uk_post_code(postcode),
            match_string(postcode, &pattern),
        ],
    );
    assert!(report.is_valid());
}

#[test]
fn test_mixed_field_kinds() {
    let tags: Vec<String> = Vec::new();
    let colour = "purple";
    let token = "0xdeadbeef";
    let report = ValidationErrors::new()
        .validate("tags", [not_empty(&tags)])
        .validate("colour", [any_string(colour, &["red", "green", "blue"])])
        .validate("token", [has_prefix(token, "0x"), is_hex(&token[2..])])
        .validate("contact", [email("someone@example.com")])
        .validate("zip", [us_zip_code("12201-7050")])
        .validate("ratio", [between_number(0.5, 0.0, 1.0)]);

    assert_eq!(
        report.fields().collect::<Vec<_>>(),
        vec!["colour", "tags"]
    );
    assert_eq!(
        report.to_string(),
        "[colour: value not found in allowed values], [tags: value cannot be empty]"
    );
}

#[test]
fn test_custom_check_alongside_builtins() {
    let password = "hunter2";
    let has_digit = Check::predicate("hasDigit", "value must contain a digit", || {
        password.chars().any(|c| c.is_ascii_digit())
    });
    let report = ValidationErrors::new()
        .validate("password", [str_length(password, 8, 64), has_digit]);
    assert_eq!(
        report.get("password"),
        Some(&["value must be between 8 and 64 characters".to_string()][..])
    );
}

#[test]
fn test_single_field_reports() {
    let wrapped = ValidationErrors::single("upstream", vec!["timed out".into()]);
    assert_eq!(wrapped.to_string(), "[upstream: timed out]");

    assert!(ValidationErrors::from_error("upstream", None::<std::io::Error>).is_none());
}
