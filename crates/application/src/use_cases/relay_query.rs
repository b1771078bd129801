use std::sync::Arc;

use tierdns_domain::{wire, DomainError, Message, ResourceRecord, ResponseMessage};
use tracing::debug;

use crate::ports::{RecordStore, UpstreamExchange};

/// Recursive tier: answer from the local cache, or forward the raw query
/// bytes upstream and cache a positive reply on the way back. The
/// upstream reply is relayed unchanged, negative answers included.
pub struct RelayQueryUseCase {
    store: Arc<dyn RecordStore>,
    upstream: Arc<dyn UpstreamExchange>,
}

impl RelayQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>, upstream: Arc<dyn UpstreamExchange>) -> Self {
        Self { store, upstream }
    }

    pub async fn execute(&self, raw: &[u8]) -> Result<Vec<u8>, DomainError> {
        let query = match wire::decode(text_payload(raw)?)? {
            Message::Query(query) => query,
            Message::Response(_) => return Err(DomainError::UnexpectedResponse),
        };

        if let Some(record) = self.store.lookup(&query.name, query.record_type) {
            debug!(
                name = %query.name,
                record_type = %query.record_type,
                "Cache hit, answering locally"
            );
            let response =
                ResponseMessage::from_record(query.transaction_id, &record, Some(wire::ADVERTISED_TTL));
            return Ok(wire::encode_response(&response).into_bytes());
        }

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            "Cache miss, forwarding upstream"
        );
        let reply_raw = self.upstream.exchange(raw).await?;
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

        Ok(reply_raw)
    }
}

pub(super) fn text_payload(raw: &[u8]) -> Result<&str, DomainError> {
    std::str::from_utf8(raw)
        .map_err(|_| DomainError::MalformedMessage("payload is not valid UTF-8".to_string()))
}
