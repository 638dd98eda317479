//! Number Lifecycle Engine — derived-field rules and the permissive
//! transition model.

mod common;

use chrono::Utc;
use common::*;
use numrent_common::error::MarketError;
use numrent_common::models::number::NumberStatus;
use numrent_market::lifecycle;
use uuid::Uuid;

#[tokio::test]
async fn test_completed_sets_completed_at() {
    let db = test_db().await;
    let number = seed_number(&db, "15550001111", "US", "1.99").await;

    let updated = lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Completed)
        .await
        .unwrap();

    assert_eq!(updated.status, NumberStatus::Completed);
    assert!(updated.completed_at.is_some());
}

#[tokio::test]
async fn test_leaving_completed_clears_completed_at() {
    let db = test_db().await;
    let number = seed_number(&db, "15550002222", "US", "1.99").await;

    lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Completed)
        .await
        .unwrap();
    let updated = lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Accepted)
        .await
        .unwrap();

    assert_eq!(updated.status, NumberStatus::Accepted);
    assert!(updated.completed_at.is_none());
}

#[tokio::test]
async fn test_recovery_states_release_the_rental() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Releasing Buyer").await;

    for (status, phone) in [
        (NumberStatus::Cancelled, "15550003333"),
        (NumberStatus::ReturnedToQueue, "15550004444"),
    ] {
        let number = seed_rented_number(
            &db,
            buyer.id,
            phone,
            "2.50",
            NumberStatus::Accepted,
            Utc::now(),
        )
        .await;
        assert!(number.buyer_id.is_some());
        assert!(number.rented_at.is_some());

        let updated = lifecycle::update_number_status(&db.pool, number.id, status)
            .await
            .unwrap();

        assert_eq!(updated.status, status);
        assert!(updated.buyer_id.is_none());
        assert!(updated.rented_at.is_none());
        assert!(updated.completed_at.is_none());
    }
}

#[tokio::test]
async fn test_active_states_leave_ownership_untouched() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Holding Buyer").await;
    let rented_at = Utc::now();
    let number = seed_rented_number(
        &db,
        buyer.id,
        "15550005555",
        "3.00",
        NumberStatus::Rented,
        rented_at,
    )
    .await;

    for status in [
        NumberStatus::Accepted,
        NumberStatus::Rented,
        NumberStatus::Available,
    ] {
        let updated = lifecycle::update_number_status(&db.pool, number.id, status)
            .await
            .unwrap();
        // The engine never sets nor clears ownership for these statuses.
        assert_eq!(updated.buyer_id, Some(buyer.id));
        assert!(updated.rented_at.is_some());
    }
}

#[tokio::test]
async fn test_any_status_may_move_to_any_status() {
    // No forbidden-edge guard exists: completed -> available is legal.
    let db = test_db().await;
    let number = seed_number(&db, "15550006666", "US", "1.00").await;

    lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Completed)
        .await
        .unwrap();
    let updated = lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Available)
        .await
        .unwrap();

    assert_eq!(updated.status, NumberStatus::Available);
    assert!(updated.completed_at.is_none());
}

#[tokio::test]
async fn test_repeating_a_transition_keeps_derived_fields() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Repeat Buyer").await;
    let number = seed_rented_number(
        &db,
        buyer.id,
        "15550007777",
        "1.00",
        NumberStatus::Accepted,
        Utc::now(),
    )
    .await;

    let first = lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Cancelled)
        .await
        .unwrap();
    let second = lifecycle::update_number_status(&db.pool, number.id, NumberStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.buyer_id, second.buyer_id);
    assert_eq!(first.rented_at, second.rented_at);
    assert_eq!(first.completed_at, second.completed_at);
    // updated_at still advances on every call.
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn test_missing_number_is_not_found() {
    let db = test_db().await;

    let err = lifecycle::update_number_status(&db.pool, Uuid::now_v7(), NumberStatus::Rented)
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::NotFound { .. }));
}
