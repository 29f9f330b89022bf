//! Runtime options.
//!
//! The command line takes only the file to edit, so options come from the
//! environment:
//!
//! - `JOT_LINE_NUMBERS`: show the line number gutter (`1`/`true`/`yes`/`on`)
//! - `JOT_HISTORY_LIMIT`: keep at most N undo snapshots
//! - `JOT_LOG_FILE`: write diagnostic logs to this path
//!
//! Log filtering itself uses `RUST_LOG`.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, bail};

pub const LINE_NUMBERS_VAR: &str = "JOT_LINE_NUMBERS";
pub const HISTORY_LIMIT_VAR: &str = "JOT_HISTORY_LIMIT";
pub const LOG_FILE_VAR: &str = "JOT_LOG_FILE";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub line_numbers: bool,
    pub history_limit: Option<usize>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Read options from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Read options through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let line_numbers = match var(LINE_NUMBERS_VAR) {
            Some(value) => parse_bool(LINE_NUMBERS_VAR, &value.to_string_lossy())?,
            None => false,
        };
        let history_limit = var(HISTORY_LIMIT_VAR)
            .map(|value| parse_limit(&value.to_string_lossy()))
            .transpose()?;
        let log_file = var(LOG_FILE_VAR).map(PathBuf::from);

        Ok(Self {
            line_numbers,
            history_limit,
            log_file,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean (1/0, true/false), got {other:?}"),
    }
}

fn parse_limit(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => bail!("{HISTORY_LIMIT_VAR} must be a positive integer, got {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), OsString::from(v)))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_reads_all_options() {
        let config = config_from(&[
            (LINE_NUMBERS_VAR, "yes"),
            (HISTORY_LIMIT_VAR, "50"),
            (LOG_FILE_VAR, "jot.log"),
        ])
        .unwrap();
        assert!(config.line_numbers);
        assert_eq!(config.history_limit, Some(50));
        assert_eq!(config.log_file, Some(PathBuf::from("jot.log")));
    }

    #[test]
    fn test_boolean_spellings() {
        for value in ["1", "true", "TRUE", "on"] {
            assert!(config_from(&[(LINE_NUMBERS_VAR, value)]).unwrap().line_numbers);
        }
        for value in ["0", "false", "off", "no"] {
            assert!(!config_from(&[(LINE_NUMBERS_VAR, value)]).unwrap().line_numbers);
        }
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let config = config_from(&[(HISTORY_LIMIT_VAR, ""), (LOG_FILE_VAR, "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_values_are_errors() {
        let err = config_from(&[(HISTORY_LIMIT_VAR, "lots")]).unwrap_err();
        assert!(err.to_string().contains(HISTORY_LIMIT_VAR));
        assert!(config_from(&[(HISTORY_LIMIT_VAR, "0")]).is_err());
        assert!(config_from(&[(LINE_NUMBERS_VAR, "maybe")]).is_err());
    }
}
