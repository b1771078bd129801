use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tierdns_domain::{wire, DomainError, Message, QueryMessage, RecordType, ResourceRecord};
use tracing::debug;

use crate::ports::{RecordStore, UpstreamExchange};

use super::relay_query::text_payload;

/// Result of one client lookup.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub result: String,
    pub ttl: Option<u32>,
    pub cache_hit: bool,
}

/// Client tier: terminal consumer of the resolution chain. A cache hit
/// produces no network traffic at all.
pub struct ResolveHostnameUseCase {
    store: Arc<dyn RecordStore>,
    upstream: Arc<dyn UpstreamExchange>,
    next_transaction_id: AtomicU32,
}

impl ResolveHostnameUseCase {
    pub fn new(store: Arc<dyn RecordStore>, upstream: Arc<dyn UpstreamExchange>) -> Self {
        Self {
            store,
            upstream,
            next_transaction_id: AtomicU32::new(1),
        }
    }

    pub async fn execute(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Resolution, DomainError> {
        if let Some(record) = self.store.lookup(name, record_type) {
            debug!(name, record_type = %record_type, "Cache hit, no query sent");
            return Ok(Resolution {
                result: record.result,
                ttl: record.ttl,
                cache_hit: true,
            });
        }

        let query = QueryMessage::new(
            self.next_transaction_id.fetch_add(1, Ordering::Relaxed),
            name,
            record_type,
        );
        debug!(name, record_type = %record_type, "Cache miss, querying resolver");
        let reply_raw = self
            .upstream
            .exchange(wire::encode_query(&query).as_bytes())
            .await?;
        let reply = match wire::decode(text_payload(&reply_raw)?)? {
            Message::Response(reply) => reply,
            Message::Query(_) => return Err(DomainError::UnexpectedQuery),
        };

        if !reply.is_not_found() {
            self.store.add(ResourceRecord::cached(
                reply.name.clone(),
                reply.record_type,
                reply.result.clone(),
                reply.ttl,
            ));
        }

        Ok(Resolution {
            result: reply.result,
            ttl: reply.ttl,
            cache_hit: false,
        })
    }
}
