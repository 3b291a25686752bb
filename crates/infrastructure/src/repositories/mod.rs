pub mod properties_config_repository;
pub mod saved_state_repository;

pub use properties_config_repository::PropertiesConfigRepository;
pub use saved_state_repository::JsonSavedStateRepository;
