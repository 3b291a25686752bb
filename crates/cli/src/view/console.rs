use dnsfilter_application::ports::DnsServerConfigView;
use dnsfilter_application::use_cases::EditMode;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct ConsoleState {
    mode: EditMode,
    closed: bool,
}

/// Terminal rendition of the settings screen. Messages go to stderr; the
/// view tracks the editor mode and whether the screen was closed.
#[derive(Default)]
pub struct ConsoleView {
    state: Mutex<ConsoleState>,
}

impl ConsoleView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn state(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn edit_mode(&self) -> EditMode {
        self.state().mode.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.state().closed
    }
}

impl DnsServerConfigView for ConsoleView {
    fn show_toast_and_close_screen(&self, message: Option<&str>) {
        if let Some(message) = message {
            eprintln!("{}", message);
        }
        self.state().closed = true;
    }

    fn show_toast(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn show_raw_mode(&self, text: &str) {
        self.state().mode = EditMode::Raw(text.to_string());
    }

    fn show_raw_mode_error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn reset_to_default_mode(&self) {
        self.state().mode = EditMode::List;
    }

    fn set_manual_dns_servers(&self, manual: bool) {
        eprintln!(
            "Manual DNS servers {}",
            if manual { "enabled" } else { "disabled" }
        );
    }
}
