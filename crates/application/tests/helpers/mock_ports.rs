#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tierdns_application::ports::{RecordStore, UpstreamExchange};
use tierdns_domain::{DomainError, RecordType, ResourceRecord};

/// In-memory store mirroring the first-match-by-insertion contract.
pub struct MockRecordStore {
    records: Mutex<Vec<ResourceRecord>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<ResourceRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl RecordStore for MockRecordStore {
    fn add(&self, record: ResourceRecord) {
        self.records.lock().unwrap().push(record);
    }

    fn lookup(&self, name: &str, record_type: RecordType) -> Option<ResourceRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name && r.record_type == record_type)
            .cloned()
    }

    fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn snapshot(&self) -> Vec<ResourceRecord> {
        self.records.lock().unwrap().clone()
    }
}

/// Scripted upstream that records what was sent and counts exchanges.
pub struct MockUpstream {
    reply: Mutex<Option<Vec<u8>>>,
    exchanges: AtomicU64,
    last_sent: Mutex<Option<Vec<u8>>>,
}

impl MockUpstream {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Mutex::new(Some(reply.as_bytes().to_vec())),
            exchanges: AtomicU64::new(0),
            last_sent: Mutex::new(None),
        }
    }

    /// An upstream that should never be reached; any exchange fails.
    pub fn unreachable() -> Self {
        Self {
            reply: Mutex::new(None),
            exchanges: AtomicU64::new(0),
            last_sent: Mutex::new(None),
        }
    }

    pub fn exchange_count(&self) -> u64 {
        self.exchanges.load(Ordering::Relaxed)
    }

    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.last_sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstream {
    async fn exchange(&self, message: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.exchanges.fetch_add(1, Ordering::Relaxed);
        *self.last_sent.lock().unwrap() = Some(message.to_vec());
        self.reply
            .lock()
            .unwrap()
            .clone()
            .ok_or(DomainError::Shutdown)
    }
}
