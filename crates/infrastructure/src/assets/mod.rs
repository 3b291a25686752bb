pub mod default_config;

pub use default_config::{AssetDirectoryDefaultConfig, BundledDefaultConfig, DEFAULT_CONFIG_ASSET};
