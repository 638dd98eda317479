//! Payment-history lookup — existence gate and pass-through pagination.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use numrent_common::error::MarketError;
use numrent_db::repository;
use numrent_market::billing::payment_history;
use uuid::Uuid;

#[tokio::test]
async fn test_history_requires_an_existing_buyer() {
    let db = test_db().await;

    let err = payment_history(&db.pool, Uuid::now_v7(), Some(10), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::NotFound { .. }));
}

#[tokio::test]
async fn test_history_is_returned_newest_first() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "History Buyer").await;

    for day in [3, 1, 2] {
        repository::billing::insert_record(
            &db.pool,
            Uuid::now_v7(),
            buyer.id,
            money("1.00"),
            "daily rental charge",
            Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap(),
        )
        .await
        .unwrap();
    }

    let records = payment_history(&db.pool, buyer.id, Some(10), 0)
        .await
        .unwrap();

    let days: Vec<u32> = records
        .iter()
        .map(|r| chrono::Datelike::day(&r.billing_date))
        .collect();
    assert_eq!(days, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_omitted_limit_uses_the_default_page_size() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Default Page Buyer").await;

    for day in 1..=3 {
        repository::billing::insert_record(
            &db.pool,
            Uuid::now_v7(),
            buyer.id,
            money("1.00"),
            "daily rental charge",
            Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
        )
        .await
        .unwrap();
    }

    // Well under the default page size, so everything comes back.
    let records = payment_history(&db.pool, buyer.id, None, 0).await.unwrap();
    assert_eq!(records.len(), 3);
}
