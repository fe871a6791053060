//! Configuration loaded from a TOML file.
//!
//! The default location is `<config_dir>/calc-history/config.toml`. A
//! missing file at the default location means defaults; an explicit path
//! must exist.
//!
//! ```toml
//! [display]
//! thousands_separators = true
//! max_decimal_places = 10
//!
//! [clipboard]
//! copy_results = false
//!
//! [logging]
//! default = "warn"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, Result};

const APP_DIR: &str = "calc-history";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
    pub logging: LoggingConfig,
}

/// How results are rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Group integer digits with commas.
    pub thousands_separators: bool,
    /// Results are rounded to this many decimal places.
    pub max_decimal_places: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separators: true,
            max_decimal_places: 10,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful result, as if `--copy` was passed.
    pub copy_results: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub default: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
        }
    }
}

/// Default config file path, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::parse(&content)
            .map_err(|e| CalcError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML content; missing keys fall back to defaults.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.display.thousands_separators);
        assert_eq!(config.display.max_decimal_places, 10);
        assert!(!config.clipboard.copy_results);
        assert_eq!(config.logging.default, "warn");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [display]
            max_decimal_places = 4

            [logging]
            default = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.max_decimal_places, 4);
        assert!(config.display.thousands_separators);
        assert_eq!(config.logging.default, "debug");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("[display]\nmax_decimal_places = \"many\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[clipboard]\ncopy_results = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.clipboard.copy_results);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }
}
