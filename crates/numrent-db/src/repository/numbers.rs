//! Number repository — gateway primitives for the rentable inventory.
//!
//! The lifecycle derivation itself lives in `numrent-market::lifecycle`;
//! this module only executes the resulting writes, plus the filtered and
//! range scans the search and billing operations are built on.

use chrono::{DateTime, Utc};
use numrent_common::any_row::{encode_datetime, encode_money};
use numrent_common::models::number::{Number, NumberFilter, NumberStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Add a number to the pool, starting out `available` and unowned.
pub async fn create_number(
    pool: &sqlx::AnyPool,
    id: Uuid,
    phone_number: &str,
    country: &str,
    number_type: &str,
    price: Decimal,
    seller_id: Option<Uuid>,
) -> Result<Number, sqlx::Error> {
    let now = encode_datetime(Utc::now());
    sqlx::query_as::<_, Number>(
        r#"
        INSERT INTO numbers (id, phone_number, country, type, status, buyer_id, seller_id, rented_at, completed_at, price, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NULL, $6, NULL, NULL, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(id.to_string())
    .bind(phone_number)
    .bind(country)
    .bind(number_type)
    .bind(NumberStatus::Available.as_str())
    .bind(seller_id.map(|s| s.to_string()))
    .bind(encode_money(price))
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await
}

/// Find a number by its unique ID.
pub async fn find_by_id(pool: &sqlx::AnyPool, id: Uuid) -> Result<Option<Number>, sqlx::Error> {
    sqlx::query_as::<_, Number>("SELECT * FROM numbers WHERE id = $1")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await
}

/// Find a number by the phone number itself.
pub async fn find_by_phone_number(
    pool: &sqlx::AnyPool,
    phone_number: &str,
) -> Result<Option<Number>, sqlx::Error> {
    sqlx::query_as::<_, Number>("SELECT * FROM numbers WHERE phone_number = $1")
        .bind(phone_number)
        .fetch_optional(pool)
        .await
}

/// List the whole inventory, newest first.
pub async fn list_numbers(pool: &sqlx::AnyPool) -> Result<Vec<Number>, sqlx::Error> {
    sqlx::query_as::<_, Number>("SELECT * FROM numbers ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Predicate-filtered scan. Criteria are ANDed; an empty filter scans the
/// whole table. No ORDER BY — result order is unspecified by contract.
pub async fn filter_numbers(
    pool: &sqlx::AnyPool,
    filter: &NumberFilter,
) -> Result<Vec<Number>, sqlx::Error> {
    // Placeholders are numbered as binds accumulate: $1 is the first
    // provided criterion, whichever that is.
    let mut conditions: Vec<String> = Vec::new();
    let mut binds: Vec<String> = Vec::new();

    if let Some(country) = &filter.country {
        binds.push(country.clone());
        conditions.push(format!("country = ${}", binds.len()));
    }
    if let Some(number_type) = &filter.number_type {
        binds.push(number_type.clone());
        conditions.push(format!("type = ${}", binds.len()));
    }
    if let Some(status) = filter.status {
        binds.push(status.as_str().to_string());
        conditions.push(format!("status = ${}", binds.len()));
    }
    if let Some(buyer_id) = filter.buyer_id {
        binds.push(buyer_id.to_string());
        conditions.push(format!("buyer_id = ${}", binds.len()));
    }
    if let Some(seller_id) = filter.seller_id {
        binds.push(seller_id.to_string());
        conditions.push(format!("seller_id = ${}", binds.len()));
    }
    if let Some(fragment) = &filter.phone_number {
        // ILIKE is PostgreSQL-only; LOWER/LIKE works on both backends.
        binds.push(format!("%{}%", fragment.to_lowercase()));
        conditions.push(format!("LOWER(phone_number) LIKE ${}", binds.len()));
    }

    let mut sql = String::from("SELECT * FROM numbers");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    let mut query = sqlx::query_as::<_, Number>(&sql);
    for bind in &binds {
        query = query.bind(bind.as_str());
    }
    query.fetch_all(pool).await
}

/// Write a status plus its derived ownership/time fields in one UPDATE.
///
/// `release_rental` erases the buyer reference and the rental timestamp —
/// the recovery-state rule. `None` is returned when no row has the given id.
pub async fn apply_status_change<'e, E>(
    executor: E,
    id: Uuid,
    status: NumberStatus,
    completed_at: Option<DateTime<Utc>>,
    release_rental: bool,
    now: DateTime<Utc>,
) -> Result<Option<Number>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Any>,
{
    let sql = if release_rental {
        r#"
        UPDATE numbers SET
            status = $1,
            completed_at = $2,
            buyer_id = NULL,
            rented_at = NULL,
            updated_at = $3
        WHERE id = $4
        RETURNING *
        "#
    } else {
        r#"
        UPDATE numbers SET
            status = $1,
            completed_at = $2,
            updated_at = $3
        WHERE id = $4
        RETURNING *
        "#
    };
    sqlx::query_as::<_, Number>(sql)
        .bind(status.as_str())
        .bind(completed_at.map(encode_datetime))
        .bind(encode_datetime(now))
        .bind(id.to_string())
        .fetch_optional(executor)
        .await
}

/// Bulk-move every `accepted` number of a buyer back to the queue, erasing
/// the rental fields. Returns the number of rows reclaimed.
///
/// Runs inside the stopwork transaction, hence the generic executor.
pub async fn reclaim_accepted<'e, E>(
    executor: E,
    buyer_id: Uuid,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Any>,
{
    let result = sqlx::query(
        r#"
        UPDATE numbers SET
            status = $1,
            buyer_id = NULL,
            rented_at = NULL,
            completed_at = NULL,
            updated_at = $2
        WHERE buyer_id = $3 AND status = $4
        "#,
    )
    .bind(NumberStatus::ReturnedToQueue.as_str())
    .bind(encode_datetime(now))
    .bind(buyer_id.to_string())
    .bind(NumberStatus::Accepted.as_str())
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Hand a number to a buyer: owner, rental start, and status in one write.
/// `None` is returned when no row has the given id.
pub async fn assign_rental(
    pool: &sqlx::AnyPool,
    id: Uuid,
    buyer_id: Uuid,
    rented_at: DateTime<Utc>,
    status: NumberStatus,
) -> Result<Option<Number>, sqlx::Error> {
    sqlx::query_as::<_, Number>(
        r#"
        UPDATE numbers SET
            buyer_id = $1,
            rented_at = $2,
            status = $3,
            updated_at = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(buyer_id.to_string())
    .bind(encode_datetime(rented_at))
    .bind(status.as_str())
    .bind(encode_datetime(Utc::now()))
    .bind(id.to_string())
    .fetch_optional(pool)
    .await
}

/// Numbers a buyer rented inside `[start, end)` — any status counts.
pub async fn rented_in_range(
    pool: &sqlx::AnyPool,
    buyer_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Number>, sqlx::Error> {
    sqlx::query_as::<_, Number>(
        r#"
        SELECT * FROM numbers
        WHERE buyer_id = $1 AND rented_at >= $2 AND rented_at < $3
        "#,
    )
    .bind(buyer_id.to_string())
    .bind(encode_datetime(start))
    .bind(encode_datetime(end))
    .fetch_all(pool)
    .await
}
