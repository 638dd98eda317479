//! Manual `sqlx::FromRow<'_, sqlx::any::AnyRow>` implementations for all
//! numrent-common model types, plus the text codecs they rely on.
//!
//! `sqlx::AnyPool` only decodes primitive types natively (i64, f64, bool,
//! String, bytes). UUID, timestamp, and money columns therefore cross the
//! gateway boundary as TEXT and are parsed here. Timestamps are written in a
//! fixed `Z`-suffixed RFC 3339 form so that lexicographic comparison inside
//! SQL equals chronological comparison; money is written with exactly two
//! fractional digits so values round-trip without drift.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use sqlx::{Row, any::AnyRow};
use uuid::Uuid;

use crate::models::{
    billing::BillingRecord,
    buyer::Buyer,
    number::{Number, NumberStatus},
    seller::{Seller, SellerStatus},
};

// ── Encoding (Rust → TEXT) ───────────────────────────────────────────────────

/// Render a timestamp for storage: RFC 3339, UTC, microseconds, `Z` suffix.
///
/// The fixed width keeps `>=` / `<` comparisons in SQL correct on both
/// PostgreSQL and SQLite, where the column is plain TEXT.
pub fn encode_datetime(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Render a monetary value for storage with exactly two fractional digits.
pub fn encode_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

// ── Decoding helpers (TEXT → Rust) ───────────────────────────────────────────

pub fn get_uuid(row: &AnyRow, col: &str) -> Result<Uuid, sqlx::Error> {
    let s: String = row.try_get(col)?;
    Uuid::parse_str(&s).map_err(|e| sqlx::Error::Decode(Box::new(e) as _))
}

pub fn get_opt_uuid(row: &AnyRow, col: &str) -> Result<Option<Uuid>, sqlx::Error> {
    let s: Option<String> = row.try_get(col)?;
    s.map(|v| Uuid::parse_str(&v).map_err(|e| sqlx::Error::Decode(Box::new(e) as _)))
        .transpose()
}

pub fn get_datetime(row: &AnyRow, col: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let s: String = row.try_get(col)?;
    parse_datetime(&s).map_err(sqlx::Error::Decode)
}

pub fn get_opt_datetime(row: &AnyRow, col: &str) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
    let s: Option<String> = row.try_get(col)?;
    s.map(|v| parse_datetime(&v).map_err(sqlx::Error::Decode))
        .transpose()
}

fn parse_datetime(
    s: &str,
) -> Result<DateTime<Utc>, Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Our own writes are RFC 3339 ("2024-01-15T10:30:00.000000Z")
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    // SQLite CURRENT_TIMESTAMP format: "2024-01-15 10:30:00"
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    // With fractional seconds: "2024-01-15 10:30:00.123456"
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    Err(format!("cannot parse timestamp '{s}'").into())
}

pub fn get_money(row: &AnyRow, col: &str) -> Result<Decimal, sqlx::Error> {
    let s: String = row.try_get(col)?;
    s.parse::<Decimal>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e) as _))
}

fn get_number_status(row: &AnyRow, col: &str) -> Result<NumberStatus, sqlx::Error> {
    let s: String = row.try_get(col)?;
    s.parse::<NumberStatus>()
        .map_err(|e| sqlx::Error::Decode(e.into()))
}

fn get_seller_status(row: &AnyRow, col: &str) -> Result<SellerStatus, sqlx::Error> {
    let s: String = row.try_get(col)?;
    s.parse::<SellerStatus>()
        .map_err(|e| sqlx::Error::Decode(e.into()))
}

// ── FromRow impls ────────────────────────────────────────────────────────────

impl sqlx::FromRow<'_, AnyRow> for Buyer {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_uuid(row, "id")?,
            name: row.try_get("name")?,
            is_banned: row.try_get("is_banned")?,
            ban_reason: row.try_get("ban_reason")?,
            mode: row.try_get("mode")?,
            chat_id: row.try_get("chat_id")?,
            max_numbers_per_branch: row.try_get("max_numbers_per_branch")?,
            created_at: get_datetime(row, "created_at")?,
            updated_at: get_datetime(row, "updated_at")?,
        })
    }
}

impl sqlx::FromRow<'_, AnyRow> for Seller {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_uuid(row, "id")?,
            telegram_id: row.try_get("telegram_id")?,
            status: get_seller_status(row, "status")?,
            status_comment: row.try_get("status_comment")?,
            permanent_rounding_bonus: get_money(row, "permanent_rounding_bonus")?,
            created_at: get_datetime(row, "created_at")?,
            updated_at: get_datetime(row, "updated_at")?,
        })
    }
}

impl sqlx::FromRow<'_, AnyRow> for Number {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_uuid(row, "id")?,
            phone_number: row.try_get("phone_number")?,
            country: row.try_get("country")?,
            number_type: row.try_get("type")?,
            status: get_number_status(row, "status")?,
            buyer_id: get_opt_uuid(row, "buyer_id")?,
            seller_id: get_opt_uuid(row, "seller_id")?,
            rented_at: get_opt_datetime(row, "rented_at")?,
            completed_at: get_opt_datetime(row, "completed_at")?,
            price: get_money(row, "price")?,
            created_at: get_datetime(row, "created_at")?,
            updated_at: get_datetime(row, "updated_at")?,
        })
    }
}

impl sqlx::FromRow<'_, AnyRow> for BillingRecord {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: get_uuid(row, "id")?,
            buyer_id: get_uuid(row, "buyer_id")?,
            amount: get_money(row, "amount")?,
            description: row.try_get("description")?,
            billing_date: get_datetime(row, "billing_date")?,
            created_at: get_datetime(row, "created_at")?,
        })
    }
}
