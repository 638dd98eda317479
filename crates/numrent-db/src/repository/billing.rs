//! Billing repository — append-only payment records.

use chrono::{DateTime, Utc};
use numrent_common::any_row::{encode_datetime, encode_money};
use numrent_common::models::billing::BillingRecord;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Append a billing record. Records are never mutated or deleted.
pub async fn insert_record(
    pool: &sqlx::AnyPool,
    id: Uuid,
    buyer_id: Uuid,
    amount: Decimal,
    description: &str,
    billing_date: DateTime<Utc>,
) -> Result<BillingRecord, sqlx::Error> {
    sqlx::query_as::<_, BillingRecord>(
        r#"
        INSERT INTO billing_records (id, buyer_id, amount, description, billing_date, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id.to_string())
    .bind(buyer_id.to_string())
    .bind(encode_money(amount))
    .bind(description)
    .bind(encode_datetime(billing_date))
    .bind(encode_datetime(Utc::now()))
    .fetch_one(pool)
    .await
}

/// A buyer's billing records, newest billing date first, paginated.
pub async fn payment_history(
    pool: &sqlx::AnyPool,
    buyer_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<BillingRecord>, sqlx::Error> {
    sqlx::query_as::<_, BillingRecord>(
        r#"
        SELECT * FROM billing_records
        WHERE buyer_id = $1
        ORDER BY billing_date DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(buyer_id.to_string())
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}
