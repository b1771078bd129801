use std::sync::Arc;

use tierdns_domain::{wire, QueryMessage, ResponseMessage};
use tracing::debug;

use crate::ports::RecordStore;

/// Authoritative tier: answer every query from the local zone, never
/// forward. A miss becomes the not-found sentinel response.
pub struct AnswerQueryUseCase {
    store: Arc<dyn RecordStore>,
}

impl AnswerQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, query: &QueryMessage) -> ResponseMessage {
        match self.store.lookup(&query.name, query.record_type) {
            Some(record) => {
                debug!(
                    name = %query.name,
                    record_type = %query.record_type,
                    result = %record.result,
                    "Answering from zone"
                );
                ResponseMessage::from_record(query.transaction_id, &record, Some(wire::ADVERTISED_TTL))
            }
            None => {
                debug!(
                    name = %query.name,
                    record_type = %query.record_type,
                    "Name not in zone"
                );
                ResponseMessage::not_found(query)
            }
        }
    }
}
