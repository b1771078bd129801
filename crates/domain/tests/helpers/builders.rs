#![allow(dead_code)]

use tierdns_domain::{RecordType, ResourceRecord};

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    result: String,
    ttl: Option<u32>,
    is_static: bool,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            result: "192.0.2.1".to_string(),
            ttl: Some(60),
            is_static: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn result(mut self, result: &str) -> Self {
        self.result = result.to_string();
        self
    }

    pub fn ttl(mut self, ttl: Option<u32>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn static_record(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(
            self.name,
            self.record_type,
            self.result,
            self.ttl,
            self.is_static,
        )
    }
}
