use async_trait::async_trait;
use dnsfilter_application::ports::ConfigurationAccess;
use dnsfilter_domain::{DomainError, Properties, PropertiesDocument};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Configuration store backed by a `.properties` file such as `dnsfilter.conf`.
///
/// Updates rewrite only the affected lines and replace the file through a
/// temporary sibling, so the store is either fully updated or untouched.
pub struct PropertiesConfigRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PropertiesConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<PropertiesDocument, DomainError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::ConfigError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        PropertiesDocument::from_latin1(&bytes)
    }

    async fn write_document(&self, document: &PropertiesDocument) -> Result<(), DomainError> {
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, document.to_latin1())
            .await
            .map_err(|e| {
                DomainError::IoError(format!("Failed to write {}: {}", tmp.display(), e))
            })?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(DomainError::IoError(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ConfigurationAccess for PropertiesConfigRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get_properties(&self) -> Result<Properties, DomainError> {
        let document = self.read_document().await?;
        let properties = document.to_properties();
        debug!(keys = properties.len(), "Configuration loaded");
        Ok(properties)
    }

    async fn update_config_value(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.update_config_values(&[(key, value.to_string())]).await
    }

    #[instrument(skip(self, updates), fields(path = %self.path.display(), count = updates.len()))]
    async fn update_config_values(&self, updates: &[(&str, String)]) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        for (key, value) in updates {
            document.set(key, value);
        }
        self.write_document(&document).await?;

        info!("Configuration updated");
        Ok(())
    }
}
