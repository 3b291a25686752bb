use dnsfilter_application::ports::DefaultConfigSource;
use dnsfilter_domain::Config;
use dnsfilter_infrastructure::assets::{AssetDirectoryDefaultConfig, BundledDefaultConfig};
use dnsfilter_infrastructure::repositories::{
    JsonSavedStateRepository, PropertiesConfigRepository,
};
use std::sync::Arc;
use tracing::debug;

pub struct Repositories {
    pub config_store: Arc<PropertiesConfigRepository>,
    pub defaults: Arc<dyn DefaultConfigSource>,
    pub saved_state: JsonSavedStateRepository,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        let defaults: Arc<dyn DefaultConfigSource> = match config.store.defaults_dir {
            Some(ref dir) => {
                debug!(dir = %dir, "Using default configuration from asset directory");
                Arc::new(AssetDirectoryDefaultConfig::new(dir))
            }
            None => Arc::new(BundledDefaultConfig),
        };

        Self {
            config_store: Arc::new(PropertiesConfigRepository::new(&config.store.config_file)),
            defaults,
            saved_state: JsonSavedStateRepository::new(&config.store.state_file),
        }
    }
}
