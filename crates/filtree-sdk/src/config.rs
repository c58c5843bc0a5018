//! Configuration types for FilterEditor

use crate::error::{Result, SdkError};
use filtree_runtime::UNRESOLVED_LABEL;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Editor configuration
///
/// Every field has a default, so a config file only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Label shown for leaves whose variable is unset or unknown
    pub unresolved_label: String,

    /// Prefix put before every variable name in descriptions
    pub variable_prefix: String,

    /// Apply pending edits before evaluating or describing
    pub drain_before_evaluate: bool,

    /// Log the evaluation trace of every evaluation
    pub trace_evaluations: bool,
}

impl FilterConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            unresolved_label: UNRESOLVED_LABEL.to_string(),
            variable_prefix: String::new(),
            drain_before_evaluate: true,
            trace_evaluations: false,
        }
    }

    /// Set the label for unresolved variables
    pub fn with_unresolved_label(mut self, label: impl Into<String>) -> Self {
        self.unresolved_label = label.into();
        self
    }

    /// Set the variable name prefix
    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    /// Enable draining before evaluation
    pub fn drain_before_evaluate(mut self, enable: bool) -> Self {
        self.drain_before_evaluate = enable;
        self
    }

    /// Enable evaluation tracing
    pub fn trace_evaluations(mut self, enable: bool) -> Self {
        self.trace_evaluations = enable;
        self
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(SdkError::ConfigError(format!(
                    "Unsupported config file: {} (expected .yaml, .yml or .json)",
                    path.display()
                )))
            }
        };

        let content = std::fs::read_to_string(path)?;
        let config = parse(&content)?;
        tracing::debug!("Loaded filter config from {}", path.display());
        Ok(config)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
