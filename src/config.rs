/*!
 * Simulator Configuration
 *
 * Environment-driven settings for the demo binary.
 *
 * Environment variables:
 * - PARTITION_TOTAL_MEMORY: total memory size (default: script's size, then 1000)
 * - PARTITION_SCRIPT: path to a JSON script (default: built-in demo)
 * - PARTITION_REPORT_JSON: print snapshots as JSON instead of text (default: false)
 */

use crate::core::limits::DEFAULT_TOTAL_MEMORY;
use crate::core::types::Size;
use crate::driver::Script;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: expected a non-negative integer")]
    #[diagnostic(code(config::invalid_number))]
    InvalidNumber { var: &'static str, value: String },

    #[error("Failed to read script {path}")]
    #[diagnostic(code(config::read_script))]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script {path}")]
    #[diagnostic(
        code(config::parse_script),
        help("Scripts are JSON objects with an optional total_memory and a steps list.")
    )]
    ParseScript {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolved simulator settings
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Explicit memory size; overrides the script's own size when set
    pub total_memory: Option<Size>,
    pub script_path: Option<PathBuf>,
    pub report_json: bool,
}

impl SimConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let total_memory = match lookup("PARTITION_TOTAL_MEMORY") {
            Some(value) => Some(value.trim().parse::<Size>().map_err(|_| {
                ConfigError::InvalidNumber {
                    var: "PARTITION_TOTAL_MEMORY",
                    value,
                }
            })?),
            None => None,
        };

        let script_path = lookup("PARTITION_SCRIPT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let report_json = lookup("PARTITION_REPORT_JSON")
            .map(|v| v == "1" || v == "true")
            .unwrap_or(false);

        Ok(Self {
            total_memory,
            script_path,
            report_json,
        })
    }

    /// Load the configured script, or the built-in demo when none is set
    pub fn load_script(&self) -> Result<Script, ConfigError> {
        let Some(ref path) = self.script_path else {
            return Ok(Script::demo());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadScript {
            path: path.clone(),
            source,
        })?;

        Script::from_json(&json).map_err(|source| ConfigError::ParseScript {
            path: path.clone(),
            source,
        })
    }

    /// Memory size to build the table with
    pub fn resolve_total_memory(&self, script: &Script) -> Size {
        self.total_memory
            .or(script.total_memory)
            .unwrap_or(DEFAULT_TOTAL_MEMORY)
    }
}
