#![allow(dead_code)]

use async_trait::async_trait;
use dnsfilter_application::ports::{
    ConfigurationAccess, DefaultConfigSource, DnsListAdapter, DnsServerConfigView,
};
use dnsfilter_domain::{DnsServerEntry, DomainError, Properties};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockConfigurationAccess {
    properties: Arc<RwLock<Properties>>,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
    write_batches: Arc<RwLock<Vec<Vec<(String, String)>>>>,
}

impl MockConfigurationAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(text: &str) -> Self {
        let mock = Self::new();
        *mock.properties.write().unwrap() = Properties::parse(text).unwrap();
        mock
    }

    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().unwrap() = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().unwrap() = fail;
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.properties.read().unwrap().get(key).map(str::to_string)
    }

    pub fn write_batches(&self) -> Vec<Vec<(String, String)>> {
        self.write_batches.read().unwrap().clone()
    }
}

#[async_trait]
impl ConfigurationAccess for MockConfigurationAccess {
    async fn get_properties(&self) -> Result<Properties, DomainError> {
        if *self.fail_reads.read().unwrap() {
            return Err(DomainError::ConfigError("Mock store unreadable".to_string()));
        }
        Ok(self.properties.read().unwrap().clone())
    }

    async fn update_config_value(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.update_config_values(&[(key, value.to_string())]).await
    }

    async fn update_config_values(&self, updates: &[(&str, String)]) -> Result<(), DomainError> {
        if *self.fail_writes.read().unwrap() {
            return Err(DomainError::IoError("Mock store read-only".to_string()));
        }
        let mut properties = self.properties.write().unwrap();
        for (key, value) in updates {
            properties.set_property(*key, value.clone());
        }
        self.write_batches.write().unwrap().push(
            updates
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );
        Ok(())
    }
}

pub struct MockDefaultConfigSource {
    result: Result<Properties, DomainError>,
}

impl MockDefaultConfigSource {
    pub fn with_properties(text: &str) -> Self {
        Self {
            result: Ok(Properties::parse(text).unwrap()),
        }
    }

    pub fn missing() -> Self {
        Self {
            result: Err(DomainError::DefaultConfigUnavailable(
                "dnsfilter.conf not found".to_string(),
            )),
        }
    }
}

#[async_trait]
impl DefaultConfigSource for MockDefaultConfigSource {
    async fn read_default_properties(&self) -> Result<Properties, DomainError> {
        self.result.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ToastAndClose(Option<String>),
    Toast(String),
    RawMode(String),
    RawModeError(String),
    ResetToDefaultMode,
    ManualDnsServers(bool),
}

#[derive(Default)]
pub struct RecordingView {
    events: RwLock<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.read().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }

    pub fn toasts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Toast(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn raw_mode_errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::RawModeError(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn closed(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, ViewEvent::ToastAndClose(_)))
    }

    fn push(&self, event: ViewEvent) {
        self.events.write().unwrap().push(event);
    }
}

impl DnsServerConfigView for RecordingView {
    fn show_toast_and_close_screen(&self, message: Option<&str>) {
        self.push(ViewEvent::ToastAndClose(message.map(str::to_string)));
    }

    fn show_toast(&self, message: &str) {
        self.push(ViewEvent::Toast(message.to_string()));
    }

    fn show_raw_mode(&self, text: &str) {
        self.push(ViewEvent::RawMode(text.to_string()));
    }

    fn show_raw_mode_error(&self, message: &str) {
        self.push(ViewEvent::RawModeError(message.to_string()));
    }

    fn reset_to_default_mode(&self) {
        self.push(ViewEvent::ResetToDefaultMode);
    }

    fn set_manual_dns_servers(&self, manual: bool) {
        self.push(ViewEvent::ManualDnsServers(manual));
    }
}

#[derive(Default)]
pub struct MockListAdapter {
    entries: Vec<DnsServerEntry>,
}

impl MockListAdapter {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    pub fn with_entries(lines: &[&str]) -> Box<Self> {
        Box::new(Self {
            entries: lines.iter().map(|l| l.parse().unwrap()).collect(),
        })
    }
}

impl DnsListAdapter for MockListAdapter {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn add_all(&mut self, entries: Vec<DnsServerEntry>) {
        self.entries.extend(entries);
    }

    fn objects_count(&self) -> usize {
        self.entries.len()
    }

    fn item(&self, index: usize) -> Option<&DnsServerEntry> {
        self.entries.get(index)
    }
}

pub fn entries(lines: &[&str]) -> Vec<DnsServerEntry> {
    lines.iter().map(|l| l.parse().unwrap()).collect()
}
