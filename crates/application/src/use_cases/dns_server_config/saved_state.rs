use serde::{Deserialize, Serialize};

use super::edit_mode::EditMode;

/// Editor state kept across restarts of the settings screen.
///
/// Field names match the keys the screen has always persisted, including
/// `detectDNS` holding the manual-servers flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(rename = "detectDNS")]
    pub manual_dns_servers: bool,

    /// Raw text when `is_raw_mode`, otherwise the line-joined entries.
    #[serde(rename = "fallbackDNS")]
    pub dns_list: String,

    #[serde(rename = "isRadModeDNS")]
    pub is_raw_mode: bool,
}

impl SavedState {
    pub fn edit_mode(&self) -> EditMode {
        if self.is_raw_mode {
            EditMode::Raw(self.dns_list.clone())
        } else {
            EditMode::List
        }
    }
}
