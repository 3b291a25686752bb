use serde::{Deserialize, Serialize};

use crate::raw_entries::DEFAULT_LINE_SEPARATOR;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Separator between entries in raw editing text.
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_separator: default_line_separator(),
        }
    }
}

fn default_line_separator() -> String {
    DEFAULT_LINE_SEPARATOR.to_string()
}
