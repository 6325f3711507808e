//! Environment Variable Settings Module
//!
//! Reads NUMCONV_LANG, NUMCONV_STRIP_MARKER, NUMCONV_LOG and RUST_LOG.
//! Lookups go through a closure so tests never touch the process environment.

use std::env;

use api_facades::Language;

/// Default language for text bases given without an explicit language
pub const LANG_VAR: &str = "NUMCONV_LANG";
/// Truthy value drops the "..." marker from truncated results
pub const STRIP_MARKER_VAR: &str = "NUMCONV_STRIP_MARKER";
/// Diagnostics filter, preferred over RUST_LOG
pub const LOG_VAR: &str = "NUMCONV_LOG";
pub const RUST_LOG_VAR: &str = "RUST_LOG";
/// Filter used when nothing else is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub default_lang: Option<Language>,
    pub strip_marker: bool,
    pub log_filter: Option<String>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through `lookup`
    ///
    /// # Returns
    /// * `Ok(Settings)` - Unset or empty variables fall back to defaults
    /// * `Err(String)` - NUMCONV_LANG names an unknown language
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let default_lang = match non_empty(LANG_VAR) {
            Some(code) => Some(
                code.parse::<Language>()
                    .map_err(|e| format!("{}: {}", LANG_VAR, e))?,
            ),
            None => None,
        };
        let strip_marker = non_empty(STRIP_MARKER_VAR).map_or(false, |value| is_truthy(&value));
        let log_filter = non_empty(LOG_VAR).or_else(|| non_empty(RUST_LOG_VAR));

        Ok(Settings { default_lang, strip_marker, log_filter })
    }

    /// Diagnostics filter: command line first, then environment, then "warn"
    pub fn resolve_log_filter(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.resolve_log_filter(None), "warn");
    }

    #[test]
    fn test_language() {
        assert_eq!(settings(&[("NUMCONV_LANG", "es")]).unwrap().default_lang, Some(Language::Spanish));
        assert_eq!(settings(&[("NUMCONV_LANG", "  ")]).unwrap().default_lang, None);
        assert!(settings(&[("NUMCONV_LANG", "fr")]).is_err());
    }

    #[test]
    fn test_strip_marker() {
        assert!(settings(&[("NUMCONV_STRIP_MARKER", "1")]).unwrap().strip_marker);
        assert!(settings(&[("NUMCONV_STRIP_MARKER", "Yes")]).unwrap().strip_marker);
        assert!(!settings(&[("NUMCONV_STRIP_MARKER", "0")]).unwrap().strip_marker);
        assert!(!settings(&[("NUMCONV_STRIP_MARKER", "off")]).unwrap().strip_marker);
    }

    #[test]
    fn test_log_filter_precedence() {
        let both = settings(&[("NUMCONV_LOG", "debug"), ("RUST_LOG", "trace")]).unwrap();
        assert_eq!(both.resolve_log_filter(None), "debug");
        assert_eq!(both.resolve_log_filter(Some("info")), "info");

        let rust_only = settings(&[("RUST_LOG", "trace")]).unwrap();
        assert_eq!(rust_only.resolve_log_filter(None), "trace");
    }
}
