use async_trait::async_trait;
use dnsfilter_application::ports::DefaultConfigSource;
use dnsfilter_domain::{DomainError, Properties};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_ASSET: &str = "dnsfilter.conf";

const BUNDLED_DEFAULT_CONFIG: &str = include_str!("../../assets/dnsfilter.conf");

/// Factory defaults compiled into the binary.
pub struct BundledDefaultConfig;

#[async_trait]
impl DefaultConfigSource for BundledDefaultConfig {
    async fn read_default_properties(&self) -> Result<Properties, DomainError> {
        Properties::parse(BUNDLED_DEFAULT_CONFIG)
            .map_err(|e| DomainError::DefaultConfigUnavailable(e.to_string()))
    }
}

/// Factory defaults read from `dnsfilter.conf` inside an asset directory.
pub struct AssetDirectoryDefaultConfig {
    dir: PathBuf,
}

impl AssetDirectoryDefaultConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DefaultConfigSource for AssetDirectoryDefaultConfig {
    async fn read_default_properties(&self) -> Result<Properties, DomainError> {
        let path = self.dir.join(DEFAULT_CONFIG_ASSET);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            DomainError::DefaultConfigUnavailable(format!("{}: {}", path.display(), e))
        })?;
        Properties::from_latin1(&bytes).map_err(|e| {
            DomainError::DefaultConfigUnavailable(format!("{}: {}", path.display(), e))
        })
    }
}
