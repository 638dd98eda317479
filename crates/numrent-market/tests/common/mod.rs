//! Shared fixtures: an in-memory SQLite gateway carrying the real schema,
//! plus seed helpers for the tables the operations touch.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use numrent_common::models::buyer::Buyer;
use numrent_common::models::number::{Number, NumberStatus};
use numrent_db::{Database, repository, schema};
use rust_decimal::Decimal;
use uuid::Uuid;

pub async fn test_db() -> Database {
    let db = Database::connect_memory().await.expect("in-memory database");
    schema::ensure_schema(&db.pool).await.expect("schema bootstrap");
    db
}

pub fn money(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

pub async fn seed_buyer(db: &Database, name: &str) -> Buyer {
    repository::buyers::create_buyer(
        &db.pool,
        Uuid::now_v7(),
        name,
        "standard",
        &format!("chat-{}", Uuid::new_v4()),
        10,
    )
    .await
    .expect("seed buyer")
}

pub async fn seed_number(db: &Database, phone: &str, country: &str, price: &str) -> Number {
    repository::numbers::create_number(
        &db.pool,
        Uuid::now_v7(),
        phone,
        country,
        "virtual",
        money(price),
        None,
    )
    .await
    .expect("seed number")
}

/// A number already handed to `buyer_id`, in the given status.
pub async fn seed_rented_number(
    db: &Database,
    buyer_id: Uuid,
    phone: &str,
    price: &str,
    status: NumberStatus,
    rented_at: DateTime<Utc>,
) -> Number {
    let number = seed_number(db, phone, "US", price).await;
    repository::numbers::assign_rental(&db.pool, number.id, buyer_id, rented_at, status)
        .await
        .expect("assign rental")
        .expect("seeded number exists")
}
