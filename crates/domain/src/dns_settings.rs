use crate::properties::Properties;

pub const DETECT_DNS_PROPERTY: &str = "detectDNS";
pub const FALLBACK_DNS_PROPERTY: &str = "fallbackDNS";

/// The two DNS-related settings of the shared configuration store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsSettings {
    pub detect_dns: bool,
    /// `;`-separated entry list as stored.
    pub fallback_dns: String,
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self {
            detect_dns: true,
            fallback_dns: String::new(),
        }
    }
}

impl DnsSettings {
    pub fn from_properties(properties: &Properties) -> Self {
        Self {
            detect_dns: parse_bool(properties.get_property(DETECT_DNS_PROPERTY, "true")),
            fallback_dns: properties.get_property(FALLBACK_DNS_PROPERTY, "").to_string(),
        }
    }

    /// Manual servers are the negation of automatic detection.
    pub fn manual_dns_servers(&self) -> bool {
        !self.detect_dns
    }
}

/// Only a case-insensitive `true` is true, anything else is false.
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
