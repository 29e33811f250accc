//! Store lifecycle and fixture loading through the facade.

use std::io::Write;

use crate::test_utils::*;

#[tokio::test]
async fn shutdown_fails_later_queries() {
    let svc = fixture_service();
    assert_eq!(svc.backend(), "memory");
    svc.shutdown().await.unwrap();
    assert_eq!(svc.list_all().await.unwrap_err().kind(), "store");
    // An empty search still answers without the store.
    assert!(svc.search(Some("")).await.unwrap().is_empty());
}

#[test]
fn missing_fixture_is_a_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = moviegraph::open_fixture(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), "store");
}

#[test]
fn malformed_fixture_is_a_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"nodes\": [{\"id\": \"one\"}]}").unwrap();
    let err = moviegraph::open_fixture(file.path()).unwrap_err();
    assert_eq!(err.kind(), "serialization");
}

#[test]
fn dangling_relationship_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"nodes": [{"id": 1, "labels": ["Movie"]}],
            "relationships": [{"source": 2, "type": "ACTED_IN", "target": 1}]}"#,
    )
    .unwrap();
    let err = moviegraph::open_fixture(file.path()).unwrap_err();
    assert_eq!(err.kind(), "validation");
}
