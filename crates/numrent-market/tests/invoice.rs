//! Billing Aggregator — day-boundary inclusion and exact decimal totals.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use numrent_common::error::MarketError;
use numrent_common::models::number::NumberStatus;
use numrent_market::invoice::generate_daily_invoice;
use uuid::Uuid;

#[tokio::test]
async fn test_day_interval_is_half_open() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Boundary Buyer").await;

    let at_midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let last_second = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
    let next_day = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 1).unwrap();

    let included_a = seed_rented_number(
        &db,
        buyer.id,
        "15554440001",
        "1.00",
        NumberStatus::Rented,
        at_midnight,
    )
    .await;
    let included_b = seed_rented_number(
        &db,
        buyer.id,
        "15554440002",
        "1.00",
        NumberStatus::Rented,
        last_second,
    )
    .await;
    seed_rented_number(
        &db,
        buyer.id,
        "15554440003",
        "1.00",
        NumberStatus::Rented,
        next_day,
    )
    .await;

    let invoice = generate_daily_invoice(&db.pool, buyer.id, "2024-01-15")
        .await
        .unwrap();

    assert_eq!(invoice.total_numbers_rented, 2);
    let line_ids: Vec<Uuid> = invoice.numbers.iter().map(|l| l.id).collect();
    assert!(line_ids.contains(&included_a.id));
    assert!(line_ids.contains(&included_b.id));
}

#[tokio::test]
async fn test_total_amount_is_an_exact_decimal_sum() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Decimal Buyer").await;
    let rented_at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

    for (phone, price) in [
        ("15554440004", "1.99"),
        ("15554440005", "2.01"),
        ("15554440006", "0.50"),
    ] {
        seed_rented_number(&db, buyer.id, phone, price, NumberStatus::Rented, rented_at).await;
    }

    let invoice = generate_daily_invoice(&db.pool, buyer.id, "2024-01-15")
        .await
        .unwrap();

    assert_eq!(invoice.total_numbers_rented, 3);
    assert_eq!(invoice.total_amount, money("4.50"));
    assert_eq!(invoice.total_amount.to_string(), "4.50");
}

#[tokio::test]
async fn test_status_does_not_affect_inclusion() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Any Status Buyer").await;
    let rented_at = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();

    seed_rented_number(
        &db,
        buyer.id,
        "15554440007",
        "1.00",
        NumberStatus::Completed,
        rented_at,
    )
    .await;
    seed_rented_number(
        &db,
        buyer.id,
        "15554440008",
        "1.00",
        NumberStatus::Accepted,
        rented_at,
    )
    .await;

    let invoice = generate_daily_invoice(&db.pool, buyer.id, "2024-01-15")
        .await
        .unwrap();

    assert_eq!(invoice.total_numbers_rented, 2);
}

#[tokio::test]
async fn test_zero_rentals_is_a_valid_empty_invoice() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Quiet Buyer").await;

    let invoice = generate_daily_invoice(&db.pool, buyer.id, "2024-03-01")
        .await
        .unwrap();

    assert_eq!(invoice.buyer_id, buyer.id);
    assert_eq!(invoice.buyer_name, "Quiet Buyer");
    assert_eq!(invoice.date, "2024-03-01");
    assert_eq!(invoice.total_numbers_rented, 0);
    assert_eq!(invoice.total_amount, money("0"));
    assert!(invoice.numbers.is_empty());
}

#[tokio::test]
async fn test_only_the_requested_buyers_rentals_count() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Mine").await;
    let other = seed_buyer(&db, "Theirs").await;
    let rented_at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

    seed_rented_number(&db, buyer.id, "15554440009", "1.00", NumberStatus::Rented, rented_at)
        .await;
    seed_rented_number(&db, other.id, "15554440010", "9.99", NumberStatus::Rented, rented_at)
        .await;

    let invoice = generate_daily_invoice(&db.pool, buyer.id, "2024-01-15")
        .await
        .unwrap();

    assert_eq!(invoice.total_numbers_rented, 1);
    assert_eq!(invoice.total_amount, money("1.00"));
}

#[tokio::test]
async fn test_unknown_buyer_is_not_found() {
    let db = test_db().await;

    let err = generate_daily_invoice(&db.pool, Uuid::now_v7(), "2024-01-15")
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::NotFound { .. }));
}

#[tokio::test]
async fn test_malformed_date_is_a_validation_error() {
    let db = test_db().await;
    let buyer = seed_buyer(&db, "Date Buyer").await;

    let err = generate_daily_invoice(&db.pool, buyer.id, "15/01/2024")
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::Validation { .. }));
}
