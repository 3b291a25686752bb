use dnsfilter_application::ports::DnsListAdapter;
use dnsfilter_domain::DnsServerEntry;

#[derive(Debug, Clone, Default)]
pub struct VecDnsListAdapter {
    entries: Vec<DnsServerEntry>,
}

impl VecDnsListAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<DnsServerEntry>) -> Self {
        Self { entries }
    }
}

impl DnsListAdapter for VecDnsListAdapter {
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

    fn entries(&self) -> Vec<DnsServerEntry> {
        self.entries.clone()
    }
}
