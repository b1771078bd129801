use super::RecordType;

/// A cached name→result mapping held by one tier.
///
/// `ttl` counts down in whole seconds; `None` means the record has no
/// countdown and lives until the process exits. Static records are the
/// zone data provisioned at startup and are never evicted, whatever
/// their TTL says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    /// Address or referral name, kept opaque.
    pub result: String,

    pub ttl: Option<u32>,

    pub is_static: bool,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        result: impl Into<String>,
        ttl: Option<u32>,
        is_static: bool,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            result: result.into(),
            ttl,
            is_static,
        }
    }

    /// Static zone entry: no countdown, never evicted.
    pub fn permanent(
        name: impl Into<String>,
        record_type: RecordType,
        result: impl Into<String>,
    ) -> Self {
        Self::new(name, record_type, result, None, true)
    }

    /// Entry learned from a downstream reply, subject to the countdown.
    pub fn cached(
        name: impl Into<String>,
        record_type: RecordType,
        result: impl Into<String>,
        ttl: Option<u32>,
    ) -> Self {
        Self::new(name, record_type, result, ttl, false)
    }

    /// Eviction rule: only a non-static record whose countdown has run
    /// out leaves the store. A record without a TTL never counts down.
    pub fn is_evictable(&self) -> bool {
        !self.is_static && self.ttl == Some(0)
    }

    pub fn has_countdown(&self) -> bool {
        matches!(self.ttl, Some(n) if n > 0)
    }
}
