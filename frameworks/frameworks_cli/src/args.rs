//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing. Per-base options are plain
//! strings here and become `BaseOptions` once the base is known.

use api_facades::{parse_extra_characters, parse_order, BaseId, BaseOptions, ConversionError, Language};
use clap::{Args, Parser, Subcommand};

/// numconv command-line arguments
#[derive(Parser, Debug)]
#[command(name = "numconv")]
#[command(author, version, about = "Convert numbers between numeral bases and number words")]
pub struct CliArgs {
    /// Diagnostics filter for stderr, e.g. "debug" or "usecases_words=trace"
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a value from one base to another
    Convert(ConvertArgs),

    /// Print the canonical form of a value
    Standardize {
        value: String,
        #[command(flatten)]
        base: BaseArgs,
    },

    /// Print whether a value is well formed for a base
    Validate {
        value: String,
        #[command(flatten)]
        base: BaseArgs,
    },

    /// Print the zero digit of a base
    #[command(name = "zero-char")]
    ZeroChar {
        #[command(flatten)]
        base: BaseArgs,
    },
}

/// Arguments of `numconv convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Value to convert (quote words and negative numbers)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Source base: binary, octal, decimal, hexadecimal, base62, base64, text
    #[arg(long, short)]
    pub from: BaseId,

    /// Target base
    #[arg(long, short)]
    pub to: BaseId,

    /// Segment order of the source alphabet, e.g. "lowercase,uppercase,numbers"
    #[arg(long)]
    pub from_order: Option<String>,

    /// Two extra characters of a base64 source alphabet
    #[arg(long)]
    pub from_extra: Option<String>,

    /// Language of text input (en, es)
    #[arg(long)]
    pub from_lang: Option<Language>,

    /// Segment order of the target alphabet
    #[arg(long)]
    pub to_order: Option<String>,

    /// Two extra characters of a base64 target alphabet
    #[arg(long)]
    pub to_extra: Option<String>,

    /// Language of text output (en, es)
    #[arg(long)]
    pub to_lang: Option<Language>,

    /// Drop the trailing "..." of a truncated result
    #[arg(long)]
    pub strip_marker: bool,
}

/// One base and its options
#[derive(Args, Debug, Clone)]
pub struct BaseArgs {
    /// Base: binary, octal, decimal, hexadecimal, base62, base64, text
    #[arg(long, short)]
    pub base: BaseId,

    /// Segment order (base62, base64)
    #[arg(long)]
    pub order: Option<String>,

    /// Two extra characters (base64)
    #[arg(long)]
    pub extra: Option<String>,

    /// Language (text)
    #[arg(long)]
    pub lang: Option<Language>,
}

impl ConvertArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        check_options(self.from, self.from_order.is_some(), self.from_extra.is_some(), self.from_lang.is_some())
            .map_err(|e| format!("--from-{}", e))?;
        check_options(self.to, self.to_order.is_some(), self.to_extra.is_some(), self.to_lang.is_some())
            .map_err(|e| format!("--to-{}", e))
    }

    /// Options of the source base; `default_lang` applies to text without --from-lang
    pub fn from_options(&self, default_lang: Option<Language>) -> Result<BaseOptions, ConversionError> {
        build_options(
            self.from,
            self.from_order.as_deref(),
            self.from_extra.as_deref(),
            self.from_lang.or(default_lang),
        )
    }

    /// Options of the target base
    pub fn to_options(&self, default_lang: Option<Language>) -> Result<BaseOptions, ConversionError> {
        build_options(
            self.to,
            self.to_order.as_deref(),
            self.to_extra.as_deref(),
            self.to_lang.or(default_lang),
        )
    }
}

impl BaseArgs {
    pub fn validate(&self) -> Result<(), String> {
        check_options(self.base, self.order.is_some(), self.extra.is_some(), self.lang.is_some())
            .map_err(|e| format!("--{}", e))
    }

    pub fn options(&self, default_lang: Option<Language>) -> Result<BaseOptions, ConversionError> {
        build_options(self.base, self.order.as_deref(), self.extra.as_deref(), self.lang.or(default_lang))
    }
}

fn check_options(base: BaseId, order: bool, extra: bool, lang: bool) -> Result<(), String> {
    if order && !matches!(base, BaseId::Base62 | BaseId::Base64) {
        return Err(format!("order is only valid for base62 and base64, not {}", base));
    }
    if extra && base != BaseId::Base64 {
        return Err(format!("extra is only valid for base64, not {}", base));
    }
    if lang && base != BaseId::Text {
        return Err(format!("lang is only valid for text, not {}", base));
    }
    Ok(())
}

fn build_options(
    base: BaseId,
    order: Option<&str>,
    extra: Option<&str>,
    lang: Option<Language>,
) -> Result<BaseOptions, ConversionError> {
    let mut options = BaseOptions::default();
    if let Some(order) = order {
        options = options.with_order(parse_order(order)?);
    }
    if let Some(extra) = extra {
        options = options.with_extra_characters(parse_extra_characters(extra)?);
    }
    // a default language only ever applies to text
    if let (Some(lang), BaseId::Text) = (lang, base) {
        options = options.with_lang(lang);
    }
    Ok(options)
}
