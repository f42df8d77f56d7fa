//! Validate values supplied as command-line flags.

use crate::error::{CliError, CliResult};
use clap::{Args, Command};
use fieldcheck_core::{ValidationErrors, min_number, str_length};
use fieldcheck_log::debug;

#[derive(Args, Debug, Clone)]
pub struct FlagsArgs {
    /// Name of a thing
    #[arg(long, env = "FIELDCHECK_NAME", default_value = "")]
    pub name: String,

    /// An amount of something or other
    #[arg(long, env = "FIELDCHECK_TOTAL", default_value_t = 0, allow_negative_numbers = true)]
    pub total: i64,

    /// Report problems but carry on as if the input were valid
    #[arg(long)]
    pub warn_only: bool,
}

/// Checks applied to the flag values.
pub fn check(args: &FlagsArgs) -> Result<(), ValidationErrors> {
    ValidationErrors::new()
        .validate("name", [str_length(&args.name, 1, 20)])
        .validate("amount", [min_number(args.total, 10)])
        .into_result()
}

fn usage() -> String {
    FlagsArgs::augment_args(Command::new("fieldcheck flags"))
        .render_help()
        .to_string()
}

pub fn run(args: &FlagsArgs) -> CliResult<()> {
    if let Err(errors) = check(args) {
        println!("{}", errors);
        eprintln!("{}", usage());

        if !args.warn_only {
            return Err(CliError::Invalid(errors));
        }
        debug!("continuing with invalid flags");
    }

    println!("all valid, nice");
    Ok(())
}
