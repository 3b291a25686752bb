use dnsfilter_application::use_cases::SavedState;
use dnsfilter_domain::DomainError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Keeps the editor's unsaved state in a JSON file between runs.
pub struct JsonSavedStateRepository {
    path: PathBuf,
}

impl JsonSavedStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<SavedState>, DomainError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let state = serde_json::from_str(&text).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Saved editor state is corrupt");
            DomainError::ConfigError(format!(
                "Corrupt saved state in {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(state))
    }

    pub async fn save(&self, state: &SavedState) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| DomainError::ConfigError(format!("Failed to encode state: {}", e)))?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            DomainError::IoError(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), raw_mode = state.is_raw_mode, "Editor state saved");
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::IoError(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
