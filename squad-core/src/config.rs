//! TOML configuration shared by the TUI and the CLI.
//!
//! ```toml
//! roster = "data/players.json"        # path or http(s) URL
//! state_dir = "/home/me/.local/share/squad-builder"
//! log_file = "/tmp/squad-tui.log"
//! log_level = "debug"
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::roster::RosterSource;

pub const APP_DIR: &str = "squad-builder";
pub const DEFAULT_ROSTER: &str = "data/players.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub roster: String,
    pub state_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.to_string(),
            state_dir: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults. An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn roster_source(&self) -> RosterSource {
        RosterSource::parse(&self.roster)
    }

    /// Directory of the key-value store.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.state_dir().join("squad-tui.log"))
    }
}

/// `<config_dir>/squad-builder/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.roster_source(),
            RosterSource::File(PathBuf::from(DEFAULT_ROSTER))
        );
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config = AppConfig::from_toml(
            r#"
            roster = "https://example.com/time.json"
            state_dir = "/tmp/squad"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.roster_source(),
            RosterSource::Url("https://example.com/time.json".into())
        );
        assert_eq!(config.state_dir(), PathBuf::from("/tmp/squad"));
        assert_eq!(config.log_file(), PathBuf::from("/tmp/squad/squad-tui.log"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(matches!(
            AppConfig::from_toml("roster = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
