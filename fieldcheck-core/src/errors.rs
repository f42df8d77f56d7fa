// Check failures and the aggregated validation report

use crate::Check;
use fieldcheck_log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Rendering of a report with no failed fields.
pub const NO_ERRORS: &str = "no validation errors";

/// Why a single check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Constraint that failed, e.g. `"strLength"`
    pub constraint: &'static str,

    /// Message for the person who supplied the value
    pub message: String,
}

impl CheckFailure {
    pub fn new(constraint: &'static str, message: impl Into<String>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CheckFailure {}

/// Failure messages grouped by field name.
///
/// A field appears only once one of its checks has failed, so an empty
/// report means every field passed. The report is itself an error, which
/// lets it travel through `?` like any other failure.
///
/// Serializes as a JSON object of field name to an array of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `checks` in order and record the failures under `field`.
    ///
    /// Failures replace whatever `field` held before. A call whose checks
    /// all pass leaves `field` untouched, so failures from an earlier call
    /// for the same field are kept.
    ///
    /// ```
    /// use fieldcheck_core::{ValidationErrors, positive_number, str_length};
    ///
    /// let report = ValidationErrors::new()
    ///     .validate("name", [str_length("My Name", 4, 10)])
    ///     .validate("count", [positive_number(0)]);
    ///
    /// assert!(!report.is_valid());
    /// assert_eq!(report.to_string(), "[count: value 0 should be greater than 0]");
    /// ```
    pub fn validate<'a, I>(mut self, field: impl Into<String>, checks: I) -> Self
    where
        I: IntoIterator<Item = Check<'a>>,
    {
        self.validate_mut(field, checks);
        self
    }

    /// In-place form of [`validate`](Self::validate).
    pub fn validate_mut<'a, I>(&mut self, field: impl Into<String>, checks: I) -> &mut Self
    where
        I: IntoIterator<Item = Check<'a>>,
    {
        let field = field.into();
        let failures: Vec<String> = checks
            .into_iter()
            .filter_map(|check| check.message())
            .collect();

        if !failures.is_empty() {
            debug!(
                target: "fieldcheck::report",
                "field {} failed {} check(s)",
                field,
                failures.len()
            );
            self.fields.insert(field, failures);
        }
        self
    }

    /// Wrap an existing list of messages under one field.
    ///
    /// The field is recorded even when `errors` is empty, so such a report
    /// is not valid.
    pub fn single(field: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            fields: BTreeMap::from([(field.into(), errors)]),
        }
    }

    /// Wrap an externally produced failure under `field`.
    ///
    /// Returns `None` when there is no failure, rather than an empty report.
    pub fn from_error<E: fmt::Display>(field: impl Into<String>, error: Option<E>) -> Option<Self> {
        error.map(|e| Self::single(field, vec![e.to_string()]))
    }

    /// True when no field has failed.
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    /// Same as [`is_valid`](Self::is_valid).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Failed field names, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields and their messages, sorted by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }

    /// `Ok(())` for a valid report, otherwise the report as the error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// Render to the single-line form used by [`Display`](fmt::Display).
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The response body shape: `{"errors": {field: [message, ...]}}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self })
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str(NO_ERRORS);
        }

        for (i, (field, errors)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{}: {}]", field, errors.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<BTreeMap<String, Vec<String>>> for ValidationErrors {
    fn from(fields: BTreeMap<String, Vec<String>>) -> Self {
        Self { fields }
    }
}

impl<'r> IntoIterator for &'r ValidationErrors {
    type Item = (&'r String, &'r Vec<String>);
    type IntoIter = std::collections::btree_map::Iter<'r, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
