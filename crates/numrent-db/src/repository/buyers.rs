//! Buyer repository — gateway primitives for buyer accounts.

use chrono::Utc;
use numrent_common::any_row::encode_datetime;
use numrent_common::models::buyer::Buyer;
use uuid::Uuid;

/// Create a new buyer account.
pub async fn create_buyer(
    pool: &sqlx::AnyPool,
    id: Uuid,
    name: &str,
    mode: &str,
    chat_id: &str,
    max_numbers_per_branch: i32,
) -> Result<Buyer, sqlx::Error> {
    let now = encode_datetime(Utc::now());
    sqlx::query_as::<_, Buyer>(
        r#"
        INSERT INTO buyers (id, name, is_banned, ban_reason, mode, chat_id, max_numbers_per_branch, created_at, updated_at)
        VALUES ($1, $2, FALSE, NULL, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(id.to_string())
    .bind(name)
    .bind(mode)
    .bind(chat_id)
    .bind(max_numbers_per_branch)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
}

/// Find a buyer by their unique ID.
///
/// Generic over the executor so the suspension controller can re-validate
/// inside its transaction.
pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Buyer>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Any>,
{
    sqlx::query_as::<_, Buyer>("SELECT * FROM buyers WHERE id = $1")
        .bind(id.to_string())
        .fetch_optional(executor)
        .await
}

/// Find a buyer by their external chat identifier.
pub async fn find_by_chat_id(
    pool: &sqlx::AnyPool,
    chat_id: &str,
) -> Result<Option<Buyer>, sqlx::Error> {
    sqlx::query_as::<_, Buyer>("SELECT * FROM buyers WHERE chat_id = $1")
        .bind(chat_id)
        .fetch_optional(pool)
        .await
}

/// List all buyers, newest first.
pub async fn list_buyers(pool: &sqlx::AnyPool) -> Result<Vec<Buyer>, sqlx::Error> {
    sqlx::query_as::<_, Buyer>("SELECT * FROM buyers ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Partial update — omitted fields keep their stored value. `None` is
/// returned when no row has the given id.
pub async fn update_buyer(
    pool: &sqlx::AnyPool,
    id: Uuid,
    name: Option<&str>,
    mode: Option<&str>,
    chat_id: Option<&str>,
    max_numbers_per_branch: Option<i32>,
) -> Result<Option<Buyer>, sqlx::Error> {
    sqlx::query_as::<_, Buyer>(
        r#"
        UPDATE buyers SET
            name = COALESCE($1, name),
            mode = COALESCE($2, mode),
            chat_id = COALESCE($3, chat_id),
            max_numbers_per_branch = COALESCE($4, max_numbers_per_branch),
            updated_at = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(mode)
    .bind(chat_id)
    .bind(max_numbers_per_branch)
    .bind(encode_datetime(Utc::now()))
    .bind(id.to_string())
    .fetch_optional(pool)
    .await
}

/// Set or clear the suspension flag and its reason in one write.
///
/// Unlike [`update_buyer`] this binds `ban_reason` directly, because clearing
/// it back to NULL is a valid write.
pub async fn set_ban<'e, E>(
    executor: E,
    id: Uuid,
    is_banned: bool,
    ban_reason: Option<&str>,
    now: chrono::DateTime<Utc>,
) -> Result<Option<Buyer>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Any>,
{
    sqlx::query_as::<_, Buyer>(
        r#"
        UPDATE buyers SET
            is_banned = $1,
            ban_reason = $2,
            updated_at = $3
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(is_banned)
    .bind(ban_reason)
    .bind(encode_datetime(now))
    .bind(id.to_string())
    .fetch_optional(executor)
    .await
}
