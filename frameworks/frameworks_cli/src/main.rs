//! numconv Binary Entry Point
//!
//! Exit status is 0 whenever a line is printed, including NTL and NaN
//! outcomes, and 1 when arguments, options or the input numeral are invalid.

use std::process;

use clap::Parser;
use frameworks_cli::logging::init_logging;
use frameworks_cli::{run, CliArgs, Settings};
use tracing::error;

fn main() {
    let args = CliArgs::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    init_logging(&settings.resolve_log_filter(args.log.as_deref()));

    match run(&args.command, &settings) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            error!(error = %e, "conversion failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
