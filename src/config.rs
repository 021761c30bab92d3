//! Configuration: optional TOML file with defaults for every field.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::errors::{BloatkillError, Result};

/// Full dashboard configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub dashboard: DashboardConfig,
}

/// Native window geometry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 860.0,
            resizable: true,
        }
    }
}

/// View behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Folder key shown first; the first catalog entry when unset.
    pub start_folder: Option<String>,
    /// How long a copy button shows its confirmation.
    pub copy_feedback_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_folder: None,
            copy_feedback_ms: 1500,
        }
    }
}

impl DashboardConfig {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

impl Config {
    /// Reads and validates a configuration file against `catalog`.
    pub fn load(path: &Path, catalog: &Catalog) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| BloatkillError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|err| BloatkillError::ConfigParse {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;
        config.validate(catalog)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.dashboard.copy_feedback_ms == 0 {
            return Err(invalid("dashboard.copy_feedback_ms must be greater than zero"));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if let Some(key) = &self.dashboard.start_folder {
            if !catalog.contains(key) {
                let known: Vec<_> = catalog.keys().collect();
                return Err(invalid(format!(
                    "dashboard.start_folder `{}` is not one of {}",
                    key,
                    known.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn invalid(details: impl Into<String>) -> BloatkillError {
    BloatkillError::InvalidConfig {
        details: details.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_config("");
        let config = Config::load(file.path(), &CATALOG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dashboard.copy_feedback(), Duration::from_millis(1500));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let file = write_config("[dashboard]\nstart_folder = \"Installer\"\n");
        let config = Config::load(file.path(), &CATALOG).unwrap();
        assert_eq!(config.dashboard.start_folder.as_deref(), Some("Installer"));
        assert_eq!(config.dashboard.copy_feedback_ms, 1500);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn unknown_start_folder_is_rejected() {
        let file = write_config("[dashboard]\nstart_folder = \"Temp\"\n");
        let err = Config::load(file.path(), &CATALOG).unwrap_err();
        assert!(matches!(err, BloatkillError::InvalidConfig { .. }));
        assert!(err.to_string().contains("WinSxS, Installer"));
    }

    #[test]
    fn zero_feedback_is_rejected() {
        let file = write_config("[dashboard]\ncopy_feedback_ms = 0\n");
        assert!(Config::load(file.path(), &CATALOG).is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[window\nwidth = 3");
        let err = Config::load(file.path(), &CATALOG).unwrap_err();
        assert!(matches!(err, BloatkillError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml"), &CATALOG).unwrap_err();
        assert!(matches!(err, BloatkillError::Io { .. }));
    }

    #[test]
    fn negative_window_is_rejected() {
        let mut config = Config::default();
        config.window.height = -1.0;
        assert!(config.validate(&CATALOG).is_err());
    }
}
