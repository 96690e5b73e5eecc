//! Runtime configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. Command-line flags override them.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::formatter::OutputFormat;

pub const LOG_LEVEL_VAR: &str = "COMPLAINT_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "COMPLAINT_LOG_JSON";
pub const OUTPUT_FORMAT_VAR: &str = "COMPLAINT_OUTPUT_FORMAT";
pub const LEXICON_PATH_VAR: &str = "COMPLAINT_LEXICON_PATH";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log: LogConfig,
    pub output_format: OutputFormat,
    /// Optional JSON lexicon replacing the built-in tables
    pub lexicon_path: Option<PathBuf>,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

impl Config {
    /// Load configuration, reading a `.env` file first if one exists
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is not an error
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Build configuration from the current environment only
    pub fn from_env() -> Result<Self, AppError> {
        let level = non_empty_var(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let json = match non_empty_var(LOG_JSON_VAR) {
            Some(value) => parse_bool(LOG_JSON_VAR, &value)?,
            None => false,
        };

        let output_format = match non_empty_var(OUTPUT_FORMAT_VAR) {
            Some(value) => value
                .parse()
                .map_err(|e| AppError::Config(format!("{}: {}", OUTPUT_FORMAT_VAR, e)))?,
            None => OutputFormat::default(),
        };

        let lexicon_path = non_empty_var(LEXICON_PATH_VAR).map(PathBuf::from);

        Ok(Self {
            log: LogConfig { level, json },
            output_format,
            lexicon_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 4] = [LOG_LEVEL_VAR, LOG_JSON_VAR, OUTPUT_FORMAT_VAR, LEXICON_PATH_VAR];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = Config::from_env().expect("config should load");
            assert_eq!(config, Config::default());
            assert_eq!(config.log.level, "info");
        });
    }

    #[test]
    fn test_reads_environment() {
        temp_env::with_vars(
            [
                (LOG_LEVEL_VAR, Some("debug")),
                (LOG_JSON_VAR, Some("TRUE")),
                (OUTPUT_FORMAT_VAR, Some("json")),
                (LEXICON_PATH_VAR, Some("/etc/complaints/lexicon.json")),
            ],
            || {
                let config = Config::from_env().expect("config should load");
                assert_eq!(config.log.level, "debug");
                assert!(config.log.json);
                assert_eq!(config.output_format, OutputFormat::Json);
                assert_eq!(
                    config.lexicon_path,
                    Some(PathBuf::from("/etc/complaints/lexicon.json"))
                );
            },
        );
    }

    #[test]
    fn test_invalid_values() {
        temp_env::with_vars(
            [(LOG_JSON_VAR, Some("maybe")), (OUTPUT_FORMAT_VAR, None::<&str>)],
            || {
                assert!(matches!(Config::from_env(), Err(AppError::Config(_))));
            },
        );

        temp_env::with_vars(
            [(LOG_JSON_VAR, None::<&str>), (OUTPUT_FORMAT_VAR, Some("xml"))],
            || {
                assert!(matches!(Config::from_env(), Err(AppError::Config(_))));
            },
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        temp_env::with_vars(
            [
                (LOG_LEVEL_VAR, Some("  ")),
                (LOG_JSON_VAR, Some("")),
                (OUTPUT_FORMAT_VAR, Some(" ")),
                (LEXICON_PATH_VAR, Some("")),
            ],
            || {
                let config = Config::from_env().expect("config should load");
                assert_eq!(config, Config::default());
            },
        );
    }
}
