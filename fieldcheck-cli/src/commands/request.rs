//! Validate a JSON request body the way an HTTP handler would.

use crate::error::{CliError, CliResult};
use chrono::{DateTime, Months, Utc};
use clap::Args;
use fieldcheck_core::{
    Validate, ValidationErrors, ValidationPipe, date_before, equal, not_empty, positive_number,
    str_length,
};
use fieldcheck_log::info;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// JSON file to read; stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

/// Request body accepted by the demonstration handler.
///
/// Missing keys decode to their zero values and are then caught by the
/// checks.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    pub name: String,
    pub dob: DateTime<Utc>,
    pub is_enabled: bool,
    pub count: i32,
}

impl Validate for Request {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let cutoff = Utc::now()
            .checked_sub_months(Months::new(16 * 12))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        ValidationErrors::new()
            .validate("name", [str_length(&self.name, 4, 10)])
            .validate("dob", [not_empty(&self.dob), date_before(self.dob, cutoff)])
            .validate("isEnabled", [equal(self.is_enabled, false)])
            .validate("count", [positive_number(self.count)])
            .into_result()
    }
}

fn read_body(file: Option<&PathBuf>) -> CliResult<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read(path)?),
        _ => {
            let mut body = Vec::new();
            std::io::stdin().read_to_end(&mut body)?;
            Ok(body)
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        _ => "Internal Server Error",
    }
}

pub fn run(args: &RequestArgs) -> CliResult<()> {
    let body = read_body(args.file.as_ref())?;
    let response = ValidationPipe::respond::<Request>(&body);
    info!(target: "fieldcheck::request", "answered with {}", response.status);

    println!("{} {}", response.status, reason(response.status));
    if let Some(text) = response.body_str().filter(|text| !text.is_empty()) {
        println!("{}", text);
    }

    if response.status == 200 {
        Ok(())
    } else {
        Err(CliError::Rejected(response.status))
    }
}
