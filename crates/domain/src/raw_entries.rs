//! Conversions between the three textual shapes of the fallback DNS list:
//! the entry list, the line-per-entry raw editing text and the
//! `;`-separated configuration value.

use crate::dns_server_entry::DnsServerEntry;
use crate::errors::DomainError;

pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

const CONFIG_VALUE_SEPARATOR: char = ';';
const CONFIG_VALUE_JOINER: &str = "; ";

fn effective_separator(line_separator: &str) -> &str {
    if line_separator.is_empty() {
        DEFAULT_LINE_SEPARATOR
    } else {
        line_separator
    }
}

/// Parses raw editing text into entries.
///
/// Blank lines are skipped. Any line that does not parse fails the whole
/// call; the error carries the 1-based line number.
pub fn parse_raw_entries(
    text: &str,
    line_separator: &str,
) -> Result<Vec<DnsServerEntry>, DomainError> {
    let mut entries = Vec::new();

    for (idx, line) in text.split(effective_separator(line_separator)).enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let entry = trimmed.parse::<DnsServerEntry>().map_err(|e| match e {
            DomainError::InvalidDnsServerEntry { reason, .. } => DomainError::InvalidRawEntry {
                line: idx + 1,
                entry: trimmed.to_string(),
                reason,
            },
            other => other,
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Serializes entries one per line, each line terminated by the separator.
pub fn entries_to_raw<'a, I>(entries: I, line_separator: &str) -> String
where
    I: IntoIterator<Item = &'a DnsServerEntry>,
{
    let separator = effective_separator(line_separator);
    let mut raw = String::new();
    for entry in entries {
        raw.push_str(&entry.to_string());
        raw.push_str(separator);
    }
    raw
}

/// Turns raw editing text into the stored `fallbackDNS` value.
///
/// Lines are trimmed, empty ones dropped, the rest joined with `"; "`.
pub fn raw_to_config_value(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(CONFIG_VALUE_JOINER)
}

/// Turns a stored `fallbackDNS` value into line-separated editing text.
pub fn config_value_to_raw(value: &str, line_separator: &str) -> String {
    value
        .split(CONFIG_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect::<Vec<_>>()
        .join(effective_separator(line_separator))
}
