use std::sync::Arc;

use tierdns_application::ports::RecordStore;
use tierdns_application::use_cases::ResolveHostnameUseCase;
use tierdns_domain::{wire, Message, RecordType, ResourceRecord, NOT_FOUND_RESULT};

mod helpers;
use helpers::{MockRecordStore, MockUpstream};

#[tokio::test]
async fn test_cache_hit_avoids_network() {
    let store = Arc::new(MockRecordStore::with_records(vec![ResourceRecord::cached(
        "cloud.amazone.com",
        RecordType::A,
        "15.197.140.28",
        Some(42),
    )]));
    let upstream = Arc::new(MockUpstream::unreachable());
    let use_case = ResolveHostnameUseCase::new(store, upstream.clone());

    let resolution = use_case
        .execute("cloud.amazone.com", RecordType::A)
        .await
        .unwrap();

    assert!(resolution.cache_hit);
    assert_eq!(resolution.result, "15.197.140.28");
    assert_eq!(resolution.ttl, Some(42));
    assert_eq!(upstream.exchange_count(), 0, "a hit must not send anything");
}

#[tokio::test]
async fn test_cache_miss_queries_and_caches_positive_reply() {
    let store = Arc::new(MockRecordStore::new());
    let upstream = Arc::new(MockUpstream::replying("1,shop.amazone.com,A,3.33.147.88,60,1"));
    let use_case = ResolveHostnameUseCase::new(store.clone(), upstream.clone());

    let resolution = use_case
        .execute("shop.amazone.com", RecordType::A)
        .await
        .unwrap();

    assert!(!resolution.cache_hit);
    assert_eq!(resolution.result, "3.33.147.88");
    assert_eq!(upstream.exchange_count(), 1);

    let cached = store.lookup("shop.amazone.com", RecordType::A).unwrap();
    assert!(!cached.is_static);
    assert_eq!(cached.ttl, Some(60));
}

#[tokio::test]
async fn test_outbound_query_is_well_formed() {
    let store = Arc::new(MockRecordStore::new());
    let upstream = Arc::new(MockUpstream::replying("1,db.internal,A,10.0.0.9,60,0"));
    let use_case = ResolveHostnameUseCase::new(store, upstream.clone());

    use_case.execute("db.internal", RecordType::A).await.unwrap();

    let sent = upstream.last_sent().unwrap();
    let decoded = wire::decode(std::str::from_utf8(&sent).unwrap()).unwrap();
    match decoded {
        Message::Query(query) => {
            assert_eq!(query.name, "db.internal");
            assert_eq!(query.record_type, RecordType::A);
        }
        Message::Response(response) => panic!("expected query, got response {:?}", response),
    }
}

#[tokio::test]
async fn test_transaction_ids_increment_per_query() {
    let store = Arc::new(MockRecordStore::new());
    let upstream = Arc::new(MockUpstream::replying(
        "1,missing.example,A,Record not found,None,0",
    ));
    let use_case = ResolveHostnameUseCase::new(store, upstream.clone());

    use_case.execute("missing.example", RecordType::A).await.unwrap();
    let first = upstream.last_sent().unwrap();
    use_case.execute("missing.example", RecordType::A).await.unwrap();
    let second = upstream.last_sent().unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_negative_reply_is_not_cached() {
    let store = Arc::new(MockRecordStore::new());
    let upstream = Arc::new(MockUpstream::replying(
        "1,missing.example,A,Record not found,None,0",
    ));
    let use_case = ResolveHostnameUseCase::new(store.clone(), upstream.clone());

    let resolution = use_case
        .execute("missing.example", RecordType::A)
        .await
        .unwrap();

    assert_eq!(resolution.result, NOT_FOUND_RESULT);
    assert_eq!(resolution.ttl, None);
    assert!(!resolution.cache_hit);
    assert_eq!(store.len(), 0);

    // A repeat lookup misses again and goes back to the network.
    use_case
        .execute("missing.example", RecordType::A)
        .await
        .unwrap();
    assert_eq!(upstream.exchange_count(), 2);
}
