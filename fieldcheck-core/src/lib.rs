//! Field checks and aggregated validation reports.
//!
//! A [`ValidationErrors`] report is built one field at a time. Each call to
//! [`ValidationErrors::validate`] runs the given checks immediately, in
//! order, and records the failure messages under the field name. Fields that
//! pass are never recorded, so an empty report means the input is valid.
//!
//! # Examples
//!
//! ## Validating fields
//!
//! ```
//! use fieldcheck_core::{ValidationErrors, equal, positive_number, str_length};
//!
//! let name = "My Name";
//! let count = 0;
//! let is_enabled = true;
//!
//! let report = ValidationErrors::new()
//!     .validate("name", [str_length(name, 4, 10)])
//!     .validate("count", [positive_number(count)])
//!     .validate("isEnabled", [equal(is_enabled, false)]);
//!
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.to_string(),
//!     "[count: value 0 should be greater than 0], [isEnabled: value true does not evaluate to false]"
//! );
//! ```
//!
//! ## Dates and emptiness
//!
//! ```
//! use chrono::{Months, TimeZone, Utc};
//! use fieldcheck_core::{ValidationErrors, date_before, not_empty};
//!
//! let dob = Utc.with_ymd_and_hms(2000, 10, 12, 0, 0, 0).unwrap();
//! let cutoff = Utc::now() - Months::new(16 * 12);
//!
//! let report = ValidationErrors::new()
//!     .validate("dob", [not_empty(&dob), date_before(dob, cutoff)]);
//! assert!(report.is_valid());
//! ```
//!
//! ## Propagating a report
//!
//! ```
//! use fieldcheck_core::{ValidationErrors, min_number};
//!
//! fn check_total(total: i64) -> Result<(), ValidationErrors> {
//!     ValidationErrors::new()
//!         .validate("amount", [min_number(total, 10)])
//!         .into_result()
//! }
//!
//! let err = check_total(3).unwrap_err();
//! assert_eq!(err.to_string(), "[amount: value 3 is smaller than minimum 10]");
//! ```

mod emptiness;
mod errors;
mod number;
mod pipe;
mod rules;
mod traits;
mod validators;

pub use emptiness::*;
pub use errors::*;
pub use number::*;
pub use pipe::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
