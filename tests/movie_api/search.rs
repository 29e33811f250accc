//! Title search and full listing.

use crate::test_utils::*;

#[tokio::test]
async fn list_all_is_ordered_by_title() {
    let svc = fixture_service();
    let all = svc.list_all().await.unwrap();
    assert_eq!(
        ids_of(&all),
        vec![
            ids::ALIEN,
            ids::ARRIVAL,
            ids::BLADE_RUNNER,
            ids::COLLATERAL,
            ids::HEAT,
            ids::RONIN,
            ids::TAXI_DRIVER,
            ids::THE_GODFATHER,
            ids::THE_INSIDER,
            ids::THE_IRISHMAN,
        ]
    );
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let svc = fixture_service();
    let found = svc.search(Some("THE ")).await.unwrap();
    assert_eq!(
        ids_of(&found),
        vec![ids::THE_GODFATHER, ids::THE_INSIDER, ids::THE_IRISHMAN]
    );
}

#[tokio::test]
async fn search_fragment_is_trimmed() {
    let svc = fixture_service();
    let found = svc.search(Some("  ronin\t")).await.unwrap();
    assert_eq!(ids_of(&found), vec![ids::RONIN]);
}

#[tokio::test]
async fn blank_or_missing_title_is_empty() {
    let svc = fixture_service();
    assert!(svc.search(None).await.unwrap().is_empty());
    assert!(svc.search(Some("")).await.unwrap().is_empty());
    assert!(svc.search(Some("   ")).await.unwrap().is_empty());
}

#[tokio::test]
async fn no_match_is_empty_not_an_error() {
    let svc = fixture_service();
    assert!(svc.search(Some("zzz")).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_optional_properties_are_none() {
    let svc = fixture_service();
    let blade = svc.search(Some("blade")).await.unwrap();
    assert_eq!(blade[0].year, None);
    assert_eq!(blade[0].rating, Some(8.1));
    let taxi = svc.search(Some("taxi")).await.unwrap();
    assert_eq!(taxi[0].year, Some(1976));
    assert_eq!(taxi[0].rating, None);
}
