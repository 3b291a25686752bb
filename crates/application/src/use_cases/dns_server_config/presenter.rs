use dnsfilter_domain::config::EditorConfig;
use dnsfilter_domain::{
    config_value_to_raw, entries_to_raw, parse_raw_entries, raw_to_config_value, DnsServerEntry,
    DnsSettings, DomainError, DETECT_DNS_PROPERTY, FALLBACK_DNS_PROPERTY,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::edit_mode::EditMode;
use super::saved_state::SavedState;
use crate::ports::{ConfigurationAccess, DefaultConfigSource, DnsListAdapter, DnsServerConfigView};

pub const CONFIG_LOAD_FAILED_MESSAGE: &str =
    "Critical error - can't load config. Try to restart application.";
pub const RESET_TO_DEFAULT_MESSAGE: &str = "DNS configuration is reset to default";
pub const RAW_TEXT_INVALID_MESSAGE: &str = "Raw text could not be converted to DNS entries";

/// Mediates between the DNS server settings screen, its entry list and the
/// shared configuration store.
///
/// The screen owns the current [`EditMode`] and passes it into every
/// operation that depends on it; the presenter answers through
/// [`DnsServerConfigView`] callbacks. Errors never leave the presenter, they
/// are turned into messages on the view.
pub struct DnsServerConfigPresenter {
    config: Arc<dyn ConfigurationAccess>,
    defaults: Arc<dyn DefaultConfigSource>,
    view: Arc<dyn DnsServerConfigView>,
    list_adapter: Box<dyn DnsListAdapter>,
    line_separator: String,
    is_manual_dns_servers: bool,
}

impl DnsServerConfigPresenter {
    /// Builds the presenter from `saved_state` when the screen is being
    /// restored, otherwise from the configuration store.
    pub async fn new(
        config: Arc<dyn ConfigurationAccess>,
        defaults: Arc<dyn DefaultConfigSource>,
        view: Arc<dyn DnsServerConfigView>,
        list_adapter: Box<dyn DnsListAdapter>,
        editor: &EditorConfig,
        saved_state: Option<SavedState>,
    ) -> Self {
        let mut presenter = Self {
            config,
            defaults,
            view,
            list_adapter,
            line_separator: editor.line_separator.clone(),
            is_manual_dns_servers: false,
        };

        presenter.list_adapter.clear();
        match saved_state {
            Some(state) => presenter.restore(state),
            None => presenter.load_from_config().await,
        }

        presenter
    }

    pub fn list_adapter(&self) -> &dyn DnsListAdapter {
        &*self.list_adapter
    }

    pub fn is_manual_dns_servers(&self) -> bool {
        self.is_manual_dns_servers
    }

    pub fn entries(&self) -> Vec<DnsServerEntry> {
        self.list_adapter.entries()
    }

    fn restore(&mut self, state: SavedState) {
        self.is_manual_dns_servers = state.manual_dns_servers;
        if state.is_raw_mode {
            debug!("Restoring DNS server editor in raw mode");
            self.view.show_raw_mode(&state.dns_list);
        } else {
            self.show_entries_or_raw(state.dns_list);
        }
    }

    async fn load_from_config(&mut self) {
        let properties = match self.config.get_properties().await {
            Ok(properties) => properties,
            Err(e) => {
                error!(error = %e, "Failed to load DNS configuration");
                self.view
                    .show_toast_and_close_screen(Some(CONFIG_LOAD_FAILED_MESSAGE));
                return;
            }
        };

        let settings = DnsSettings::from_properties(&properties);
        self.is_manual_dns_servers = settings.manual_dns_servers();
        let text = config_value_to_raw(&settings.fallback_dns, &self.line_separator);
        self.show_entries_or_raw(text);
    }

    /// Fills the list from `text`, or opens raw mode on it when a line does
    /// not parse so nothing is lost.
    fn show_entries_or_raw(&mut self, text: String) {
        match parse_raw_entries(&text, &self.line_separator) {
            Ok(entries) => self.replace_entries(entries),
            Err(e) => {
                warn!(error = %e, "Stored DNS servers contain invalid entries, opening raw mode");
                self.view.show_raw_mode(&text);
                self.view.show_raw_mode_error(&e.to_string());
            }
        }
    }

    fn replace_entries(&mut self, entries: Vec<DnsServerEntry>) {
        self.list_adapter.clear();
        self.list_adapter.add_all(entries);
    }

    fn entries_as_raw(&self) -> String {
        entries_to_raw(&self.list_adapter.entries(), &self.line_separator)
    }

    fn validate_raw(&self, text: &str) -> Option<Vec<DnsServerEntry>> {
        match parse_raw_entries(text, &self.line_separator) {
            Ok(entries) => Some(entries),
            Err(e) => {
                debug!(error = %e, "Raw DNS server text rejected");
                self.view.show_raw_mode_error(&e.to_string());
                None
            }
        }
    }

    async fn read_defaults(&self) -> Result<(Vec<DnsServerEntry>, bool), DomainError> {
        let properties = self.defaults.read_default_properties().await?;
        let settings = DnsSettings::from_properties(&properties);
        let text = config_value_to_raw(&settings.fallback_dns, &self.line_separator);
        let entries = parse_raw_entries(&text, &self.line_separator)
            .map_err(|e| DomainError::DefaultConfigUnavailable(e.to_string()))?;
        Ok((entries, settings.manual_dns_servers()))
    }

    /// Replaces entries and the manual flag with the factory defaults.
    #[instrument(skip(self))]
    pub async fn reset_dns_config_to_default(&mut self) {
        match self.read_defaults().await {
            Ok((entries, manual)) => {
                info!(entries = entries.len(), manual, "DNS configuration reset to default");
                self.view.reset_to_default_mode();
                self.replace_entries(entries);
                self.view.show_toast(RESET_TO_DEFAULT_MESSAGE);

                self.is_manual_dns_servers = manual;
                self.view.set_manual_dns_servers(manual);
            }
            Err(e) => {
                warn!(error = %e, "Failed to reset DNS configuration");
                self.view.show_toast(&e.to_string());
            }
        }
    }

    /// Toggles the editor away from `current` and returns the mode it ends in.
    ///
    /// Leaving raw mode only succeeds when every line parses; otherwise the
    /// list is left untouched and the editor stays in raw mode.
    pub fn on_changed_edit_mode_value(&mut self, current: &EditMode) -> EditMode {
        match current {
            EditMode::List => {
                let text = self.entries_as_raw();
                debug!(
                    entries = self.list_adapter.objects_count(),
                    "Switching DNS server editor to raw mode"
                );
                self.view.show_raw_mode(&text);
                EditMode::Raw(text)
            }
            EditMode::Raw(text) => match self.validate_raw(text) {
                Some(entries) => {
                    debug!(entries = entries.len(), "Switching DNS server editor to list mode");
                    self.replace_entries(entries);
                    self.view.reset_to_default_mode();
                    EditMode::List
                }
                None => current.clone(),
            },
        }
    }

    pub fn on_changed_manual_dns_servers(&mut self, is_manual_dns_servers: bool) {
        self.is_manual_dns_servers = is_manual_dns_servers;
    }

    /// Validates and writes `fallbackDNS` and `detectDNS`, then closes the
    /// screen. Nothing is written when validation fails.
    #[instrument(skip(self, current), fields(raw_mode = current.is_raw()))]
    pub async fn apply_new_configuration(&mut self, current: &EditMode) {
        let raw = match current {
            EditMode::Raw(text) => {
                if self.validate_raw(text).is_none() {
                    self.view.show_toast(RAW_TEXT_INVALID_MESSAGE);
                    return;
                }
                text.clone()
            }
            EditMode::List => self.entries_as_raw(),
        };

        let fallback_dns = raw_to_config_value(&raw.replace(self.line_separator.as_str(), "\n"));
        let detect_dns = (!self.is_manual_dns_servers).to_string();

        match self
            .config
            .update_config_values(&[
                (FALLBACK_DNS_PROPERTY, fallback_dns.clone()),
                (DETECT_DNS_PROPERTY, detect_dns.clone()),
            ])
            .await
        {
            Ok(()) => {
                info!(fallback_dns = %fallback_dns, detect_dns = %detect_dns, "DNS configuration saved");
                self.view.show_toast_and_close_screen(None);
            }
            Err(e) => {
                error!(error = %e, "Failed to save DNS configuration");
                self.view
                    .show_toast(&format!("Failed to save DNS configuration: {}", e));
            }
        }
    }

    /// Captures the active representation so the screen can be rebuilt.
    pub fn save_state(&self, current: &EditMode) -> SavedState {
        match current {
            EditMode::Raw(text) => SavedState {
                manual_dns_servers: self.is_manual_dns_servers,
                dns_list: text.clone(),
                is_raw_mode: true,
            },
            EditMode::List => SavedState {
                manual_dns_servers: self.is_manual_dns_servers,
                dns_list: self.entries_as_raw(),
                is_raw_mode: false,
            },
        }
    }
}
