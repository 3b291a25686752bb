use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DNS server entry '{entry}': {reason}")]
    InvalidDnsServerEntry { entry: String, reason: String },

    #[error("Line {line} ('{entry}'): {reason}")]
    InvalidRawEntry {
        line: usize,
        entry: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Default configuration unavailable: {0}")]
    DefaultConfigUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub(crate) fn invalid_entry(entry: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidDnsServerEntry {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}
