use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tierdns_application::ports::{RecordStore, TtlMaintenancePort, TtlTickOutcome};
use tierdns_domain::{DomainError, RecordType, ResourceRecord};
use tracing::debug;

use super::key::StoreKey;

struct StoredRecord {
    record: ResourceRecord,
    /// Table-wide insertion sequence, drives `snapshot` ordering.
    seq: u64,
}

#[derive(Default)]
struct TableInner {
    buckets: FxHashMap<StoreKey, Vec<StoredRecord>>,
    next_seq: u64,
    /// Observational only; recomputed after every sweep.
    record_count: usize,
}

/// Shared record cache for one tier.
///
/// One mutex covers lookups, insertions and the TTL pass, so the
/// countdown and its sweep run as a single atomic unit against all other
/// access. Buckets are append-only per `(name, type)` key, which keeps
/// the first-match-by-insertion lookup contract even with duplicates.
pub struct RecordTable {
    inner: Mutex<TableInner>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TableInner::default()),
        }
    }

    pub fn with_records(records: impl IntoIterator<Item = ResourceRecord>) -> Self {
        let table = Self::new();
        for record in records {
            table.add(record);
        }
        table
    }

    fn lock(&self) -> MutexGuard<'_, TableInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, record: ResourceRecord) {
        let mut inner = self.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        debug!(
            name = %record.name,
            record_type = %record.record_type,
            ttl = ?record.ttl,
            is_static = record.is_static,
            "Record added"
        );
        let key = StoreKey::new(&record.name, record.record_type);
        inner
            .buckets
            .entry(key)
            .or_default()
            .push(StoredRecord { record, seq });
        inner.record_count += 1;
    }

    pub fn lookup(&self, name: &str, record_type: RecordType) -> Option<ResourceRecord> {
        let inner = self.lock();
        inner
            .buckets
            .get(&StoreKey::new(name, record_type))
            .and_then(|bucket| bucket.first())
            .map(|stored| stored.record.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().record_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> Vec<ResourceRecord> {
        let inner = self.lock();
        let mut entries: Vec<(u64, ResourceRecord)> = inner
            .buckets
            .values()
            .flatten()
            .map(|stored| (stored.seq, stored.record.clone()))
            .collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, record)| record).collect()
    }

    /// One locked countdown pass: decrement every positive TTL, then
    /// sweep in the same critical section once any countdown sits at
    /// zero. Records without a TTL are left alone.
    pub fn tick(&self) -> TtlTickOutcome {
        let mut inner = self.lock();
        let mut decremented = 0usize;
        let mut sweep_needed = false;

        for bucket in inner.buckets.values_mut() {
            for stored in bucket.iter_mut() {
                match stored.record.ttl {
                    Some(ttl) if ttl > 0 => {
                        stored.record.ttl = Some(ttl - 1);
                        decremented += 1;
                        if ttl == 1 {
                            sweep_needed = true;
                        }
                    }
                    Some(_) => sweep_needed = true,
                    None => {}
                }
            }
        }

        let expired_removed = if sweep_needed {
            Self::sweep(&mut inner)
        } else {
            0
        };

        TtlTickOutcome {
            decremented,
            expired_removed,
            store_size: inner.record_count,
        }
    }

    /// Caller holds the lock. Removes every evictable record and
    /// recomputes the observational count.
    fn sweep(inner: &mut TableInner) -> usize {
        let before = inner.record_count;
        inner.buckets.retain(|_, bucket| {
            bucket.retain(|stored| !stored.record.is_evictable());
            !bucket.is_empty()
        });
        inner.record_count = inner.buckets.values().map(Vec::len).sum();
        before - inner.record_count
    }
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for RecordTable {
    fn add(&self, record: ResourceRecord) {
        RecordTable::add(self, record)
    }

    fn lookup(&self, name: &str, record_type: RecordType) -> Option<ResourceRecord> {
        RecordTable::lookup(self, name, record_type)
    }

    fn len(&self) -> usize {
        RecordTable::len(self)
    }

    fn snapshot(&self) -> Vec<ResourceRecord> {
        RecordTable::snapshot(self)
    }
}

#[async_trait]
impl TtlMaintenancePort for RecordTable {
    async fn run_ttl_cycle(&self) -> Result<TtlTickOutcome, DomainError> {
        Ok(self.tick())
    }
}
