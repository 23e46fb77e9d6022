//! Configuration of the `ledger-effects` tool.
//!
//! Every section has defaults, so an empty file is a valid configuration. Each section is
//! annotated with `#[serde(deny_unknown_fields)]` so that misspelled keys are rejected.

use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Root configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Output configuration.
    pub output: OutputConfig,
    /// Processing configuration.
    pub processing: ProcessingConfig,
}

/// How derived effects are written.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print each JSON report.
    pub pretty: bool,
}

/// How a batch of operations is processed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Stop at the first operation whose effects cannot be derived.
    pub fail_fast: bool,
}
