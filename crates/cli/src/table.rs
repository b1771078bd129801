use tierdns_application::ports::RecordStore;

/// Print the tier's running record table as CSV, one row per record in
/// insertion order.
pub fn display(store: &dyn RecordStore) {
    println!("record_no,name,type,result,ttl,static");
    for (record_no, record) in store.snapshot().iter().enumerate() {
        let ttl = match record.ttl {
            Some(secs) => secs.to_string(),
            None => "None".to_string(),
        };
        println!(
            "{},{},{},{},{},{}",
            record_no,
            record.name,
            record.record_type,
            record.result,
            ttl,
            u8::from(record.is_static),
        );
    }
}
