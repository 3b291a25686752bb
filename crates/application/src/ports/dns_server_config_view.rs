/// Callbacks from the DNS server settings presenter into the screen.
pub trait DnsServerConfigView: Send + Sync {
    /// Closes the screen, showing `message` first when given.
    fn show_toast_and_close_screen(&self, message: Option<&str>);

    fn show_toast(&self, message: &str);

    /// Switches the editor to raw text mode with `text` as its content.
    fn show_raw_mode(&self, text: &str);

    fn show_raw_mode_error(&self, message: &str);

    /// Switches the editor back to the structured list.
    fn reset_to_default_mode(&self);

    fn set_manual_dns_servers(&self, manual: bool);
}
