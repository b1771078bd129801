use tierdns_domain::{RecordType, ResourceRecord};

/// Port over a tier's record cache.
///
/// The cache keeps duplicate `(name, type)` entries; `lookup` resolves
/// them by insertion order, so an entry added later never shadows an
/// earlier one.
pub trait RecordStore: Send + Sync {
    /// Append a record. Always succeeds.
    fn add(&self, record: ResourceRecord);

    /// First record matching `(name, type)` exactly, case-sensitive on
    /// the name. `None` on a miss.
    fn lookup(&self, name: &str, record_type: RecordType) -> Option<ResourceRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every record in insertion order, for table display.
    fn snapshot(&self) -> Vec<ResourceRecord>;
}
