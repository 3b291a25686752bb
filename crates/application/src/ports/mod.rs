mod configuration_access;
mod default_config_source;
mod dns_list_adapter;
mod dns_server_config_view;

pub use configuration_access::ConfigurationAccess;
pub use default_config_source::DefaultConfigSource;
pub use dns_list_adapter::DnsListAdapter;
pub use dns_server_config_view::DnsServerConfigView;

// Re-export for convenience
pub use dnsfilter_domain::{DnsServerEntry, Properties};
