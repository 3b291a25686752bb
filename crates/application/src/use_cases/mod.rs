pub mod dns_server_config;

pub use dns_server_config::{DnsServerConfigPresenter, EditMode, SavedState};
