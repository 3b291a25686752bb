/// Failures while loading or checking the editor's own TOML configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Invalid dns-settings configuration: {0}")]
    Parse(String),

    #[error("Invalid setting: {0}")]
    Validation(String),
}
