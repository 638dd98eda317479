//! Schema bootstrap.
//!
//! Plain `CREATE ... IF NOT EXISTS` statements written in the dialect subset
//! both PostgreSQL and SQLite accept. IDs, timestamps, and money are TEXT on
//! purpose — see `numrent_common::any_row` for the codecs.

use sqlx::AnyPool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS buyers (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        is_banned BOOLEAN NOT NULL DEFAULT FALSE,
        ban_reason TEXT,
        mode TEXT NOT NULL,
        chat_id TEXT NOT NULL UNIQUE,
        max_numbers_per_branch INTEGER NOT NULL DEFAULT 10,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sellers (
        id TEXT PRIMARY KEY,
        telegram_id TEXT NOT NULL UNIQUE,
        status TEXT NOT NULL DEFAULT 'active',
        status_comment TEXT,
        permanent_rounding_bonus TEXT NOT NULL DEFAULT '0.00',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS numbers (
        id TEXT PRIMARY KEY,
        phone_number TEXT NOT NULL UNIQUE,
        country TEXT NOT NULL,
        type TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'available',
        buyer_id TEXT,
        seller_id TEXT,
        rented_at TEXT,
        completed_at TEXT,
        price TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS billing_records (
        id TEXT PRIMARY KEY,
        buyer_id TEXT NOT NULL,
        amount TEXT NOT NULL,
        description TEXT NOT NULL,
        billing_date TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    // Stopwork scans by owner+status; the billing aggregator scans by
    // owner+rental window.
    "CREATE INDEX IF NOT EXISTS idx_numbers_buyer_status ON numbers (buyer_id, status)",
    "CREATE INDEX IF NOT EXISTS idx_numbers_buyer_rented_at ON numbers (buyer_id, rented_at)",
    "CREATE INDEX IF NOT EXISTS idx_billing_records_buyer ON billing_records (buyer_id, billing_date)",
];

/// Create any missing tables and indexes. Idempotent.
pub async fn ensure_schema(pool: &AnyPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
