use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Shared `.properties` configuration holding `detectDNS` and `fallbackDNS`.
    #[serde(default = "default_config_file")]
    pub config_file: String,

    /// Directory with a `dnsfilter.conf` of factory defaults. The bundled
    /// defaults are used when unset.
    #[serde(default)]
    pub defaults_dir: Option<String>,

    /// Where the editor keeps unsaved state between invocations.
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            defaults_dir: None,
            state_file: default_state_file(),
        }
    }
}

fn default_config_file() -> String {
    "dnsfilter.conf".to_string()
}

fn default_state_file() -> String {
    ".dns-settings-state.json".to_string()
}
