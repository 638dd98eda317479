//! Billing models — persisted payment records and the derived daily invoice.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment-history page size applied when the caller does not supply one.
/// Mirrors the config default.
pub const DEFAULT_PAYMENT_HISTORY_PAGE_SIZE: i64 = 50;

/// A persisted billing record. Append-only: the core reads and inserts
/// these, never mutates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRecord {
    /// Unique record ID (UUID v7 — time-sortable)
    pub id: Uuid,

    /// The buyer this charge belongs to
    pub buyer_id: Uuid,

    /// Charged amount, fixed-point with two decimals
    pub amount: Decimal,

    /// Free-text description of the charge
    pub description: String,

    /// The day the charge applies to
    pub billing_date: DateTime<Utc>,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Derived summary of one buyer's rental activity for one calendar day.
///
/// Never persisted — recomputed on demand from `numbers.rented_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyInvoice {
    pub buyer_id: Uuid,

    /// Buyer's display name at generation time
    pub buyer_name: String,

    /// The requested calendar day, echoed verbatim (`YYYY-MM-DD`)
    pub date: String,

    pub total_numbers_rented: u64,

    /// Exact decimal sum of the included prices
    pub total_amount: Decimal,

    pub numbers: Vec<InvoiceLine>,
}

/// One rented number on a daily invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub id: Uuid,
    pub phone_number: String,
    pub country: String,
    #[serde(rename = "type")]
    pub number_type: String,
    pub price: Decimal,
    pub rented_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
