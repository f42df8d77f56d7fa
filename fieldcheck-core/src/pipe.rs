// Validation pipe for JSON request bodies

use crate::{Validate, ValidationErrors};
use fieldcheck_log::debug;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

/// Why a request body was rejected.
#[derive(Debug, Error)]
pub enum PipeError {
    /// Body was not the expected JSON
    #[error("failed to parse request")]
    Malformed(#[source] serde_json::Error),

    /// Body decoded but failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl PipeError {
    /// HTTP status for this failure.
    pub fn status(&self) -> u16 {
        match self {
            PipeError::Malformed(_) => 500,
            PipeError::Invalid(_) => 400,
        }
    }
}

/// Transport-neutral response produced by the pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl PipeResponse {
    fn json(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body,
        }
    }

    /// Body as UTF-8, if it is.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Decodes request bodies and runs their [`Validate`] implementation.
pub struct ValidationPipe;

impl ValidationPipe {
    /// Decode `body` as JSON and validate it.
    pub fn parse<T>(body: &[u8]) -> Result<T, PipeError>
    where
        T: DeserializeOwned + Validate,
    {
        let parsed: T = Self::parse_unvalidated(body)?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Decode `body` as JSON for types that do not validate themselves.
    pub fn parse_unvalidated<T>(body: &[u8]) -> Result<T, PipeError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(body).map_err(|e| {
            debug!(target: "fieldcheck::pipe", "request body rejected: {}", e);
            PipeError::Malformed(e)
        })
    }

    /// `400` with `{"errors": {field: [message, ...]}}`.
    pub fn error_response(errors: &ValidationErrors) -> PipeResponse {
        PipeResponse::json(400, errors.to_json().to_string().into_bytes())
    }

    /// Response for any pipe failure. Decode failures carry no body.
    pub fn failure_response(error: &PipeError) -> PipeResponse {
        match error {
            PipeError::Invalid(errors) => Self::error_response(errors),
            PipeError::Malformed(_) => PipeResponse::json(error.status(), Vec::new()),
        }
    }

    /// Decode, validate and answer in one step: `200` with an empty body
    /// when the record is valid.
    pub fn respond<T>(body: &[u8]) -> PipeResponse
    where
        T: DeserializeOwned + Validate,
    {
        match Self::parse::<T>(body) {
            Ok(_) => PipeResponse::json(200, Vec::new()),
            Err(error) => Self::failure_response(&error),
        }
    }
}

/// Validate a record inside a function returning `Result<_, PipeError>`
/// (or any error type that converts from it).
#[macro_export]
macro_rules! validate {
    ($dto:expr) => {{
        $crate::Validate::validate(&$dto).map_err($crate::PipeError::from)?
    }};
}
