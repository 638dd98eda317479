//! Seller repository — gateway primitives for seller accounts.

use chrono::Utc;
use numrent_common::any_row::{encode_datetime, encode_money};
use numrent_common::models::seller::{Seller, SellerStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Create a new seller account, starting out `active`.
pub async fn create_seller(
    pool: &sqlx::AnyPool,
    id: Uuid,
    telegram_id: &str,
    permanent_rounding_bonus: Decimal,
) -> Result<Seller, sqlx::Error> {
    let now = encode_datetime(Utc::now());
    sqlx::query_as::<_, Seller>(
        r#"
        INSERT INTO sellers (id, telegram_id, status, status_comment, permanent_rounding_bonus, created_at, updated_at)
        VALUES ($1, $2, $3, NULL, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id.to_string())
    .bind(telegram_id)
    .bind(SellerStatus::Active.as_str())
    .bind(encode_money(permanent_rounding_bonus))
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
}

/// Find a seller by their unique ID.
pub async fn find_by_id(pool: &sqlx::AnyPool, id: Uuid) -> Result<Option<Seller>, sqlx::Error> {
    sqlx::query_as::<_, Seller>("SELECT * FROM sellers WHERE id = $1")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await
}

/// Find a seller by their external Telegram identifier.
pub async fn find_by_telegram_id(
    pool: &sqlx::AnyPool,
    telegram_id: &str,
) -> Result<Option<Seller>, sqlx::Error> {
    sqlx::query_as::<_, Seller>("SELECT * FROM sellers WHERE telegram_id = $1")
        .bind(telegram_id)
        .fetch_optional(pool)
        .await
}

/// List all sellers, newest first.
pub async fn list_sellers(pool: &sqlx::AnyPool) -> Result<Vec<Seller>, sqlx::Error> {
    sqlx::query_as::<_, Seller>("SELECT * FROM sellers ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Partial update — omitted fields keep their stored value. `None` is
/// returned when no row has the given id.
pub async fn update_seller(
    pool: &sqlx::AnyPool,
    id: Uuid,
    status: Option<SellerStatus>,
    status_comment: Option<&str>,
    permanent_rounding_bonus: Option<Decimal>,
) -> Result<Option<Seller>, sqlx::Error> {
    sqlx::query_as::<_, Seller>(
        r#"
        UPDATE sellers SET
            status = COALESCE($1, status),
            status_comment = COALESCE($2, status_comment),
            permanent_rounding_bonus = COALESCE($3, permanent_rounding_bonus),
            updated_at = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(status.map(|s| s.as_str()))
    .bind(status_comment)
    .bind(permanent_rounding_bonus.map(encode_money))
    .bind(encode_datetime(Utc::now()))
    .bind(id.to_string())
    .fetch_optional(pool)
    .await
}
