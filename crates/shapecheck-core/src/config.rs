//! Configuration schema (shapecheck.toml)

use serde::{Deserialize, Serialize};

/// How a union reports failure when no member matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionReport {
    /// One `no_union_member_matched` issue carrying each member's issues
    #[default]
    Summary,

    /// Every member's issues flattened into the failure list
    AllMembers,
}

/// Options for a single validation call
///
/// Options are always passed explicitly; nothing global affects outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// Stop at the first issue inside an object, array, or tuple
    #[serde(default)]
    pub abort_early: bool,

    /// Union failure reporting
    #[serde(default)]
    pub union_report: UnionReport,
}

impl ValidateOptions {
    pub fn with_abort_early(mut self, abort_early: bool) -> Self {
        self.abort_early = abort_early;
        self
    }

    pub fn with_union_report(mut self, union_report: UnionReport) -> Self {
        self.union_report = union_report;
        self
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Validation options
    #[serde(default)]
    pub validation: ValidateOptions,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
