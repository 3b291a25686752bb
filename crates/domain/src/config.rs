pub mod editor;
pub mod errors;
pub mod logging;
pub mod root;
pub mod store;

pub use editor::EditorConfig;
pub use errors::ConfigError;
pub use logging::{LoggingConfig, LOG_LEVELS};
pub use root::{CliOverrides, Config};
pub use store::StoreConfig;
