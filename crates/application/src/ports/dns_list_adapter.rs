use dnsfilter_domain::DnsServerEntry;

/// Backing list of the structured DNS server editor.
pub trait DnsListAdapter: Send {
    fn clear(&mut self);

    fn add_all(&mut self, entries: Vec<DnsServerEntry>);

    fn objects_count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&DnsServerEntry>;

    fn entries(&self) -> Vec<DnsServerEntry> {
        (0..self.objects_count())
            .filter_map(|i| self.item(i).cloned())
            .collect()
    }
}
