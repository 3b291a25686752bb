/// Which representation of the DNS server list the editor currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Structured list; the list adapter holds the entries.
    #[default]
    List,
    /// Free text, one entry per line, as currently typed by the user.
    Raw(String),
}

impl EditMode {
    pub fn is_raw(&self) -> bool {
        matches!(self, EditMode::Raw(_))
    }

    pub fn raw_text(&self) -> Option<&str> {
        match self {
            EditMode::Raw(text) => Some(text),
            EditMode::List => None,
        }
    }
}
