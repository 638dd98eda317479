//! Billing Aggregator — daily invoices reconstructed from rental timestamps.
//!
//! An invoice is derived, never persisted: it is recomputed on demand from
//! the `rented_at` column. A number counts toward a day when its rental
//! started inside `[day 00:00, day+1 00:00)` — a half-open interval built by
//! simple day increment on naive UTC instants, no timezone calendar
//! involved. Status is not consulted: a completed or cancelled-later rental
//! still happened that day.

use chrono::{NaiveDate, NaiveTime};
use numrent_common::error::{MarketError, MarketResult};
use numrent_common::models::billing::{DailyInvoice, InvoiceLine};
use numrent_db::repository::{buyers, numbers};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Build the invoice for one buyer and one calendar day (`YYYY-MM-DD`).
///
/// Zero matching rentals is a valid, empty invoice. Unknown buyer is
/// `NotFound`; an unparseable date is a validation error.
pub async fn generate_daily_invoice(
    pool: &sqlx::AnyPool,
    buyer_id: Uuid,
    date: &str,
) -> MarketResult<DailyInvoice> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| MarketError::Validation {
        message: format!("invalid date '{date}', expected YYYY-MM-DD"),
    })?;
    let next_day = day.succ_opt().ok_or_else(|| MarketError::Validation {
        message: format!("date '{date}' is out of range"),
    })?;

    let buyer = buyers::find_by_id(pool, buyer_id)
        .await?
        .ok_or_else(|| MarketError::not_found("Buyer"))?;

    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = next_day.and_time(NaiveTime::MIN).and_utc();
    let rented = numbers::rented_in_range(pool, buyer_id, start, end).await?;

    let total_amount: Decimal = rented.iter().map(|n| n.price).sum();
    let lines: Vec<InvoiceLine> = rented
        .into_iter()
        .filter_map(|n| {
            // rented_at is non-null for every row the range predicate matched
            let rented_at = n.rented_at?;
            Some(InvoiceLine {
                id: n.id,
                phone_number: n.phone_number,
                country: n.country,
                number_type: n.number_type,
                price: n.price,
                rented_at,
                completed_at: n.completed_at,
            })
        })
        .collect();

    Ok(DailyInvoice {
        buyer_id,
        buyer_name: buyer.name,
        date: date.to_string(),
        total_numbers_rented: lines.len() as u64,
        total_amount,
        numbers: lines,
    })
}
