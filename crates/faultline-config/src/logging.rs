use std::path::PathBuf;

use serde::Deserialize;

/// Error log configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Whether handled faults are appended to the error log
    pub enabled: bool,
    /// Path of the append-only error log
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("error.log"),
        }
    }
}
