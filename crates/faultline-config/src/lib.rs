#![allow(clippy::must_use_candidate)]

mod loader;
pub mod logging;
pub mod mode;

use serde::Deserialize;

pub use logging::LoggingConfig;
pub use mode::Mode;

/// Top-level Faultline configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deployment mode controlling response verbosity
    #[serde(default)]
    pub mode: Mode,
    /// Error log emission
    #[serde(default)]
    pub logging: LoggingConfig,
}
