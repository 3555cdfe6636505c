//! Configuration handling for the storefront
//!
//! Configuration is read from, in order of preference:
//! 1. the path given with `--config` (or `STOREFRONT_CONFIG`)
//! 2. `~/.config/storefront/config.toml` (platform config directory)
//!
//! When no file is found the built-in catalog is used.
//!
//! ```toml
//! [display]
//! color = true
//! default_format = "text"
//!
//! [[catalog]]
//! name = "MacBook Air M2"
//! price = 1450.0
//! quantity = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::{Catalog, ItemSeed};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Terminal display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use colors when writing to a terminal
    pub color: bool,

    /// Output format when `--format` is not given
    pub default_format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            default_format: OutputFormat::Text,
        }
    }
}

/// Storefront configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,

    /// Items the catalog is seeded with at startup
    pub catalog: Vec<ItemSeed>,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            catalog: default_catalog(),
            source: None,
        }
    }
}

/// The catalog used when no configuration provides one
pub fn default_catalog() -> Vec<ItemSeed> {
    vec![
        ItemSeed::new("MacBook Air M2", 1450.0, 100),
        ItemSeed::new("Bose QuietComfort Earbuds", 250.0, 500),
        ItemSeed::new("Google Pixel 7", 500.0, 250),
    ]
}

impl Config {
    /// Loads configuration from `explicit`, or from the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parses and validates configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every catalog entry is a valid item
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, seed) in self.catalog.iter().enumerate() {
            seed.build()
                .map_err(|e| ConfigError::Invalid(format!("catalog entry {}: {}", i + 1, e)))?;
        }
        Ok(())
    }

    /// Builds a fresh catalog from the configured seeds
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        Catalog::from_seeds(&self.catalog).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Returns the platform config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Renders the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert!(config.display.color);
        assert_eq!(config.display.default_format, OutputFormat::Text);
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.build_catalog().unwrap().total_quantity(), 850);
    }

    #[test]
    fn parse_catalog() {
        let toml = r#"
[display]
color = false
default_format = "json"

[[catalog]]
name = "Widget"
price = 10.0
quantity = 5

[[catalog]]
name = "Gadget"
price = 20
quantity = 1
"#;

        let config = Config::parse(toml).unwrap();
        assert!(!config.display.color);
        assert_eq!(config.display.default_format, OutputFormat::Json);
        assert_eq!(
            config.catalog,
            vec![ItemSeed::new("Widget", 10.0, 5), ItemSeed::new("Gadget", 20.0, 1)]
        );
    }

    #[test]
    fn partial_config_keeps_default_catalog() {
        let config = Config::parse("[display]\ncolor = false\n").unwrap();
        assert_eq!(config.catalog, default_catalog());
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let config = Config::parse("catalog = []\n").unwrap();
        assert!(config.build_catalog().unwrap().is_empty());
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let toml = r#"
[[catalog]]
name = "   "
price = 1.0
quantity = 1
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("catalog entry 1"));
    }

    #[test]
    fn negative_quantity_fails_to_parse() {
        let toml = r#"
[[catalog]]
name = "Widget"
price = 1.0
quantity = -1
"#;
        assert!(matches!(Config::parse(toml), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.toml");
        fs::write(
            &path,
            "[[catalog]]\nname = \"Widget\"\nprice = 10.0\nquantity = 5\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.catalog.len(), 1);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn toml_roundtrip_of_defaults() {
        let text = Config::default().to_toml().unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.catalog, default_catalog());
    }
}
