//! Display configuration for species listings
//!
//! Defaults reproduce the canonical listing: a `--` suffix after each species
//! name and a single space before each attribute.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{Result, SpeciesError};

/// Options controlling how species are printed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Appended to the species name on its header line
    pub header_suffix: String,

    /// Prefix for each attribute line
    pub indent: String,

    /// Wait for one line of input before the program exits
    pub pause_on_exit: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            header_suffix: "--".to_string(),
            indent: " ".to_string(),
            pause_on_exit: true,
        }
    }
}

impl DisplayConfig {
    /// Parse from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SpeciesError::Config(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded display config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.header_suffix, "--");
        assert_eq!(config.indent, " ");
        assert!(config.pause_on_exit);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = DisplayConfig::from_toml_str("").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DisplayConfig::from_toml_str(
            r#"
            indent = "    "
            pause_on_exit = false
            "#,
        )
        .unwrap();
        assert_eq!(config.header_suffix, "--");
        assert_eq!(config.indent, "    ");
        assert!(!config.pause_on_exit);
    }

    #[test]
    fn test_invalid_toml() {
        let result = DisplayConfig::from_toml_str("indent = [");
        assert!(matches!(result, Err(SpeciesError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DisplayConfig::load(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(SpeciesError::IoError(_))));
    }
}
