//! Analyzer configuration
//!
//! Detector thresholds live here rather than as inline literals so boundary
//! values can be exercised in tests and overridden from a config file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Thresholds used by the issue detectors.
///
/// Defaults match the documented contract: 50 statements per function body,
/// nesting depth 3, 20 imports per file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Max direct statements in a function body before it is flagged
    pub max_function_statements: usize,
    /// Max nesting depth (loops, conditionals, with, try) inside a function
    pub max_nesting_depth: u32,
    /// Max import statements per file
    pub max_imports: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_function_statements: 50,
            max_nesting_depth: 3,
            max_imports: 20,
        }
    }
}

impl AnalyzerConfig {
    /// Load thresholds from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse analyzer config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_function_statements, 50);
        assert_eq!(config.max_nesting_depth, 3);
        assert_eq!(config.max_imports, 20);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AnalyzerConfig::from_toml_str("max_imports = 5\n").unwrap();
        assert_eq!(config.max_imports, 5);
        assert_eq!(config.max_function_statements, 50);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AnalyzerConfig::from_toml_str("max_import = 5\n").is_err());
    }
}
