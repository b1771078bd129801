use std::hash::{Hash, Hasher};

use compact_str::CompactString;
use tierdns_domain::RecordType;

/// Bucket key: exact (case-sensitive) name plus record type.
#[derive(Clone, Debug, Eq)]
pub(super) struct StoreKey {
    pub name: CompactString,
    pub record_type: RecordType,
}

impl StoreKey {
    #[inline]
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: CompactString::from(name),
            record_type,
        }
    }
}

impl Hash for StoreKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_str().hash(state);
        self.record_type.hash(state);
    }
}

impl PartialEq for StoreKey {
    #[inline]
    fn eq(&self, other: &StoreKey) -> bool {
        self.record_type == other.record_type && self.name == other.name
    }
}
