//! DNS settings editor domain layer
pub mod config;
pub mod dns_server_entry;
pub mod dns_settings;
pub mod errors;
pub mod properties;
pub mod raw_entries;

pub use config::{CliOverrides, Config};
pub use dns_server_entry::{DnsServerEntry, DnsServerProtocol};
pub use dns_settings::{DnsSettings, DETECT_DNS_PROPERTY, FALLBACK_DNS_PROPERTY};
pub use errors::DomainError;
pub use properties::{Properties, PropertiesDocument};
pub use raw_entries::{
    config_value_to_raw, entries_to_raw, parse_raw_entries, raw_to_config_value,
    DEFAULT_LINE_SEPARATOR,
};
