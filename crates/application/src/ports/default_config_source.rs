use async_trait::async_trait;
use dnsfilter_domain::{DomainError, Properties};

/// Port for the factory-default configuration shipped with the application.
#[async_trait]
pub trait DefaultConfigSource: Send + Sync {
    async fn read_default_properties(&self) -> Result<Properties, DomainError>;
}
