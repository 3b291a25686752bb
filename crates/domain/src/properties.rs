//! Reader and line-preserving editor for `.properties` files, the format
//! of the shared `dnsfilter.conf` configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::Chars;

use crate::errors::DomainError;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Key/value view of a properties file. Later duplicates win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Result<Self, DomainError> {
        Ok(PropertiesDocument::parse(text)?.to_properties())
    }

    /// Parses a file as stored on disk, ISO-8859-1 encoded.
    pub fn from_latin1(bytes: &[u8]) -> Result<Self, DomainError> {
        Ok(PropertiesDocument::from_latin1(bytes)?.to_properties())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_property<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: String,
    first_line: usize,
    last_line: usize,
}

/// A parsed properties file that remembers its source lines so values can
/// be replaced without disturbing comments or ordering.
#[derive(Debug, Clone, Default)]
pub struct PropertiesDocument {
    lines: Vec<String>,
    entries: Vec<Entry>,
}

impl PropertiesDocument {
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let entries = index_entries(&lines)?;
        Ok(Self { lines, entries })
    }

    /// Parses a file as stored on disk. Every byte is one ISO-8859-1
    /// character, so any byte sequence decodes.
    pub fn from_latin1(bytes: &[u8]) -> Result<Self, DomainError> {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        Self::parse(&text)
    }

    /// Encodes the document as ISO-8859-1. Characters outside that range
    /// are written as `\uXXXX` escapes.
    pub fn to_latin1(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for line in &self.lines {
            for c in line.chars() {
                match u8::try_from(c) {
                    Ok(b) => bytes.push(b),
                    Err(_) => {
                        let mut escaped = String::new();
                        push_unicode_escape(&mut escaped, c);
                        bytes.extend_from_slice(escaped.as_bytes());
                    }
                }
            }
            bytes.push(b'\n');
        }
        bytes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Replaces the effective definition of `key` in place, or appends one.
    pub fn set(&mut self, key: &str, value: &str) {
        let line = format!("{} = {}", escape(key, true), escape(value, false));

        let Some(pos) = self.entries.iter().rposition(|e| e.key == key) else {
            self.lines.push(line);
            let at = self.lines.len() - 1;
            self.entries.push(Entry {
                key: key.to_string(),
                value: value.to_string(),
                first_line: at,
                last_line: at,
            });
            return;
        };

        let (first, last) = (self.entries[pos].first_line, self.entries[pos].last_line);
        self.lines.drain(first + 1..=last);
        self.lines[first] = line;

        let removed = last - first;
        for entry in self.entries.iter_mut().skip(pos + 1) {
            entry.first_line -= removed;
            entry.last_line -= removed;
        }

        let entry = &mut self.entries[pos];
        entry.value = value.to_string();
        entry.last_line = first;
    }

    pub fn to_properties(&self) -> Properties {
        let mut properties = Properties::new();
        for entry in &self.entries {
            properties.set_property(entry.key.clone(), entry.value.clone());
        }
        properties
    }
}

impl fmt::Display for PropertiesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn has_continuation(segment: &str) -> bool {
    segment.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn index_entries(lines: &[String]) -> Result<Vec<Entry>, DomainError> {
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let first_line = i;
        let head = lines[i].trim_start_matches(WHITESPACE);
        if head.is_empty() || head.starts_with('#') || head.starts_with('!') {
            i += 1;
            continue;
        }

        let mut logical = String::new();
        let mut segment = head;
        loop {
            if !has_continuation(segment) {
                logical.push_str(segment);
                break;
            }
            logical.push_str(&segment[..segment.len() - 1]);
            if i + 1 >= lines.len() {
                break;
            }
            i += 1;
            segment = lines[i].trim_start_matches(WHITESPACE);
        }

        let (key, value) = split_key_value(&logical)
            .map_err(|reason| DomainError::ConfigError(format!("line {}: {}", first_line + 1, reason)))?;
        entries.push(Entry {
            key,
            value,
            first_line,
            last_line: i,
        });
        i += 1;
    }

    Ok(entries)
}

fn split_key_value(logical: &str) -> Result<(String, String), String> {
    let chars: Vec<char> = logical.chars().collect();

    let mut key_end = 0;
    let mut escaped = false;
    while key_end < chars.len() {
        let c = chars[key_end];
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_whitespace(c) {
            break;
        }
        key_end += 1;
    }

    let mut value_start = key_end;
    while value_start < chars.len() && is_whitespace(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && (chars[value_start] == '=' || chars[value_start] == ':') {
        value_start += 1;
        while value_start < chars.len() && is_whitespace(chars[value_start]) {
            value_start += 1;
        }
    }

    let raw_key: String = chars[..key_end].iter().collect();
    let raw_value: String = chars[value_start..].iter().collect();
    Ok((unescape(&raw_key)?, unescape(&raw_value)?))
}

fn read_hex4(chars: &mut Chars<'_>) -> Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("malformed \\u escape '\\u{}'", hex));
    }
    u32::from_str_radix(&hex, 16).map_err(|e| e.to_string())
}

/// Decodes a `\uXXXX` escape whose prefix was already consumed, joining a
/// UTF-16 surrogate pair written as two consecutive escapes.
fn decode_unicode_escape(chars: &mut Chars<'_>) -> Result<char, String> {
    let code = read_hex4(chars)?;

    if (0xD800..=0xDBFF).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Ok(low) = read_hex4(&mut lookahead) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    *chars = lookahead;
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined).ok_or_else(|| {
                        format!("invalid surrogate pair \\u{:04X}\\u{:04X}", code, low)
                    });
                }
            }
        }
    }

    char::from_u32(code).ok_or_else(|| format!("invalid code point in '\\u{:04X}'", code))
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(decode_unicode_escape(&mut chars)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn push_unicode_escape(out: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        out.push_str(&format!("\\u{:04X}", unit));
    }
}

fn escape(raw: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for (idx, c) in raw.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || idx == 0 => out.push_str("\\ "),
            '#' | '!' if is_key && idx == 0 => {
                out.push('\\');
                out.push(c);
            }
            c if !(' '..='~').contains(&c) => push_unicode_escape(&mut out, c),
            _ => out.push(c),
        }
    }
    out
}
