use async_trait::async_trait;
use dnsfilter_domain::{DomainError, Properties};

/// Port to the application-wide configuration store.
#[async_trait]
pub trait ConfigurationAccess: Send + Sync {
    async fn get_properties(&self) -> Result<Properties, DomainError>;

    async fn update_config_value(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Writes every update or none of them.
    async fn update_config_values(&self, updates: &[(&str, String)]) -> Result<(), DomainError>;
}
