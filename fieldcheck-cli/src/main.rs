//! fieldcheck CLI - try out field validation from the command line.
//!
//! # Commands
//!
//! - `fieldcheck flags --name <name> --total <n>` - Validate flag values
//! - `fieldcheck request [FILE]` - Validate a JSON request body

use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod error;

use commands::flags::{self, FlagsArgs};
use commands::request::{self, RequestArgs};

/// fieldcheck - validate input fields and report every problem at once
#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version)]
#[command(about = "Validate input fields and report every problem at once")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate values passed as flags
    Flags(FlagsArgs),

    /// Validate a JSON request body and print the response
    #[command(alias = "req")]
    Request(RequestArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    if cli.verbose {
        fieldcheck_log::set_debug(true);
    }

    let result = match &cli.command {
        Commands::Flags(args) => flags::run(args),
        Commands::Request(args) => request::run(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
