use serde::{Deserialize, Serialize};

use super::editor::EditorConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "dns-settings.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsfilter/dns-settings.toml";

/// Configuration of the DNS settings editor itself
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Locations of the shared store, the defaults and the saved state
    #[serde(default)]
    pub store: StoreConfig,

    /// Raw-mode editing options
    #[serde(default)]
    pub editor: EditorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-settings.toml in current directory
    /// 3. /etc/dnsfilter/dns-settings.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(file) = overrides.config_file {
            self.store.config_file = file;
        }
        if let Some(dir) = overrides.defaults_dir {
            self.store.defaults_dir = Some(dir);
        }
        if let Some(file) = overrides.state_file {
            self.store.state_file = file;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.line_separator.is_empty() {
            return Err(ConfigError::Validation(
                "Line separator cannot be empty".to_string(),
            ));
        }

        if self.store.config_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Configuration store path cannot be empty".to_string(),
            ));
        }

        if self.store.state_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "State file path cannot be empty".to_string(),
            ));
        }

        if !self.logging.is_known_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub config_file: Option<String>,
    pub defaults_dir: Option<String>,
    pub state_file: Option<String>,
    pub log_level: Option<String>,
}
