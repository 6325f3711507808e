//! Frameworks Layer: numconv
//!
//! Command-line front end for the numeral codec.
//!
//! ## Overview
//!
//! `numconv` parses its arguments with clap, reads defaults from the
//! environment, calls the API facades and prints one line. Diagnostics go to
//! stderr through `tracing`.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Subcommands and per-base options
//! - **[`env`](env/index.html)**: NUMCONV_LANG, NUMCONV_STRIP_MARKER, NUMCONV_LOG
//! - **[`commands`](commands/index.html)**: Subcommand execution
//! - **[`logging`](logging/index.html)**: Subscriber setup
//!
//! ## Usage
//!
//! ```text
//! numconv convert FF --from hex --to text --to-lang es
//! numconv convert 0.1 --from base62 --to decimal --strip-marker
//! numconv zero-char --base base64 --order extra,numbers,upper,lower
//! ```

pub mod args;
pub mod commands;
pub mod env;
pub mod logging;

pub use args::{BaseArgs, CliArgs, Command, ConvertArgs};
pub use commands::{render, run, CliError};
pub use env::Settings;
