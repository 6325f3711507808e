//! Subcommand Execution
//!
//! Each subcommand produces the single line `numconv` prints on stdout.
//! Data-dependent outcomes (NTL, NaN, truncation) are output, not errors.

use api_facades::{convert, standardize, validate, zero_char, ConversionError, ConversionOutcome};
use thiserror::Error;
use tracing::{debug, info};

use crate::args::{Command, ConvertArgs};
use crate::env::Settings;

/// Failures that end `numconv` with a non-zero exit status
#[derive(Error, Debug)]
pub enum CliError {
    /// Argument combination rejected before any conversion
    #[error("{0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Run `command` and return its output line
pub fn run(command: &Command, settings: &Settings) -> Result<String, CliError> {
    match command {
        Command::Convert(args) => run_convert(args, settings),
        Command::Standardize { value, base } => {
            base.validate().map_err(CliError::InvalidArguments)?;
            let options = base.options(settings.default_lang)?;
            Ok(standardize(value, base.base, &options)?)
        }
        Command::Validate { value, base } => {
            base.validate().map_err(CliError::InvalidArguments)?;
            let options = base.options(settings.default_lang)?;
            Ok(validate(value, base.base, &options)?.to_string())
        }
        Command::ZeroChar { base } => {
            base.validate().map_err(CliError::InvalidArguments)?;
            let options = base.options(settings.default_lang)?;
            Ok(zero_char(base.base, &options)?.to_string())
        }
    }
}

fn run_convert(args: &ConvertArgs, settings: &Settings) -> Result<String, CliError> {
    args.validate().map_err(CliError::InvalidArguments)?;
    let from_options = args.from_options(settings.default_lang)?;
    let to_options = args.to_options(settings.default_lang)?;

    let outcome = convert(&args.value, args.from, &from_options, args.to, &to_options)?;
    if let Some(warning) = outcome.warning() {
        info!(?warning, from = %args.from, to = %args.to, "conversion finished with a warning");
    }
    debug!(%outcome, "converted");

    Ok(render(&outcome, args.strip_marker || settings.strip_marker))
}

/// Plain-string form of `outcome`, optionally without the truncation marker
pub fn render(outcome: &ConversionOutcome, strip_marker: bool) -> String {
    match outcome {
        ConversionOutcome::Truncated(value) if strip_marker => value.clone(),
        other => other.to_string(),
    }
}
