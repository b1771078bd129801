#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tierdns_application::ports::{TtlMaintenancePort, TtlTickOutcome};
use tierdns_domain::DomainError;

pub struct MockTtlMaintenancePort {
    call_count: Arc<AtomicU64>,
    outcome: Arc<Mutex<TtlTickOutcome>>,
    should_fail: Arc<AtomicBool>,
}

impl MockTtlMaintenancePort {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            outcome: Arc::new(Mutex::new(TtlTickOutcome::default())),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_outcome(self, outcome: TtlTickOutcome) -> Self {
        *self.outcome.lock().unwrap() = outcome;
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl TtlMaintenancePort for MockTtlMaintenancePort {
    async fn run_ttl_cycle(&self) -> Result<TtlTickOutcome, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::IoError("tick failed".to_string()));
        }
        Ok(self.outcome.lock().unwrap().clone())
    }
}
