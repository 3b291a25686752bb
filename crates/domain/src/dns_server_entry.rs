use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::errors::DomainError;

const PART_SEPARATOR: &str = "::";
const INACTIVE_MARKER: char = '~';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DnsServerProtocol {
    #[default]
    Udp,
    Dot,
    Doh,
}

impl DnsServerProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsServerProtocol::Udp => "UDP",
            DnsServerProtocol::Dot => "DOT",
            DnsServerProtocol::Doh => "DOH",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            DnsServerProtocol::Udp => 53,
            DnsServerProtocol::Dot => 853,
            DnsServerProtocol::Doh => 443,
        }
    }
}

impl fmt::Display for DnsServerProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsServerProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UDP" => Ok(DnsServerProtocol::Udp),
            "DOT" => Ok(DnsServerProtocol::Dot),
            "DOH" => Ok(DnsServerProtocol::Doh),
            other => Err(format!(
                "unknown protocol '{}', expected UDP, DOT or DOH",
                other
            )),
        }
    }
}

/// A single fallback DNS server as shown in the settings list.
///
/// The text form is `[~]IP[::PORT[::PROTOCOL[::ENDPOINT]]]`, for example
/// `8.8.8.8`, `[2001:4860:4860::8888]`, `1.1.1.1::853::DOT::cloudflare-dns.com`
/// or `~1.1.1.1::443::DOH::https://cloudflare-dns.com/dns-query`. A leading
/// `~` keeps the entry in the list but marks it inactive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsServerEntry {
    pub active: bool,
    pub ip: IpAddr,
    pub port: u16,
    pub protocol: DnsServerProtocol,
    pub endpoint: Option<String>,
}

impl DnsServerEntry {
    pub fn udp(ip: IpAddr) -> Self {
        Self {
            active: true,
            ip,
            port: DnsServerProtocol::Udp.default_port(),
            protocol: DnsServerProtocol::Udp,
            endpoint: None,
        }
    }

    pub fn new(
        ip: IpAddr,
        port: u16,
        protocol: DnsServerProtocol,
        endpoint: Option<String>,
    ) -> Self {
        Self {
            active: true,
            ip,
            port,
            protocol,
            endpoint,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Plain entries serialize as the bare address.
    fn is_plain(&self) -> bool {
        self.protocol == DnsServerProtocol::Udp
            && self.port == DnsServerProtocol::Udp.default_port()
            && self.endpoint.is_none()
    }
}

fn split_host(body: &str) -> Result<(IpAddr, &str), String> {
    if let Some(inner) = body.strip_prefix('[') {
        let end = inner
            .find(']')
            .ok_or_else(|| "missing closing ']' after IPv6 address".to_string())?;
        let ip = inner[..end]
            .parse::<Ipv6Addr>()
            .map_err(|_| format!("invalid IPv6 address '{}'", &inner[..end]))?;
        return Ok((IpAddr::V6(ip), &inner[end + 1..]));
    }

    if let Ok(ip) = body.parse::<IpAddr>() {
        return Ok((ip, ""));
    }

    match body.find(PART_SEPARATOR) {
        Some(idx) => {
            let host = &body[..idx];
            let ip = host.parse::<Ipv4Addr>().map_err(|_| {
                if host.contains(':') {
                    format!("IPv6 address '{}' must be written as [{}]", host, host)
                } else {
                    format!("invalid IP address '{}'", host)
                }
            })?;
            Ok((IpAddr::V4(ip), &body[idx..]))
        }
        None => Err(format!("invalid IP address '{}'", body)),
    }
}

fn parse_port(s: &str) -> Result<u16, String> {
    let port = s
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("invalid port '{}'", s.trim()))?;
    if port == 0 {
        return Err("port must not be 0".to_string());
    }
    Ok(port)
}

fn validate_endpoint(protocol: DnsServerProtocol, endpoint: Option<&str>) -> Result<(), String> {
    match (protocol, endpoint) {
        (DnsServerProtocol::Udp, Some(ep)) => {
            Err(format!("UDP servers take no endpoint, found '{}'", ep))
        }
        (DnsServerProtocol::Doh, None) => {
            Err("DOH servers require an https:// endpoint URL".to_string())
        }
        (DnsServerProtocol::Doh, Some(ep)) if !ep.starts_with("https://") => Err(format!(
            "DOH endpoint '{}' must be an https:// URL",
            ep
        )),
        _ => Ok(()),
    }
}

impl FromStr for DnsServerEntry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(DomainError::invalid_entry(s, "entry is empty"));
        }

        let (active, body) = match line.strip_prefix(INACTIVE_MARKER) {
            Some(rest) => (false, rest.trim_start()),
            None => (true, line),
        };

        let (ip, rest) = split_host(body).map_err(|reason| DomainError::invalid_entry(line, reason))?;

        if rest.is_empty() {
            let mut entry = DnsServerEntry::udp(ip);
            entry.active = active;
            return Ok(entry);
        }

        let suffix = rest.strip_prefix(PART_SEPARATOR).ok_or_else(|| {
            DomainError::invalid_entry(line, format!("unexpected text '{}' after address", rest))
        })?;

        let mut parts = suffix.splitn(3, PART_SEPARATOR);
        let port = parse_port(parts.next().unwrap_or_default())
            .map_err(|reason| DomainError::invalid_entry(line, reason))?;

        let protocol = match parts.next() {
            Some(p) => p
                .parse::<DnsServerProtocol>()
                .map_err(|reason| DomainError::invalid_entry(line, reason))?,
            None => DnsServerProtocol::Udp,
        };

        let endpoint = parts
            .next()
            .map(str::trim)
            .filter(|ep| !ep.is_empty())
            .map(str::to_string);

        validate_endpoint(protocol, endpoint.as_deref())
            .map_err(|reason| DomainError::invalid_entry(line, reason))?;

        Ok(DnsServerEntry {
            active,
            ip,
            port,
            protocol,
            endpoint,
        })
    }
}

impl fmt::Display for DnsServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.active {
            write!(f, "{}", INACTIVE_MARKER)?;
        }
        match self.ip {
            IpAddr::V4(ip) => write!(f, "{}", ip)?,
            IpAddr::V6(ip) => write!(f, "[{}]", ip)?,
        }
        if self.is_plain() {
            return Ok(());
        }
        write!(f, "{}{}{}{}", PART_SEPARATOR, self.port, PART_SEPARATOR, self.protocol)?;
        if let Some(ref endpoint) = self.endpoint {
            write!(f, "{}{}", PART_SEPARATOR, endpoint)?;
        }
        Ok(())
    }
}
