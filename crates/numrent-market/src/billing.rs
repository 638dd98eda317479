//! Payment-history lookup over the append-only billing records.

use numrent_common::config;
use numrent_common::error::{MarketError, MarketResult};
use numrent_common::models::billing::BillingRecord;
use numrent_db::repository::{billing, buyers};
use uuid::Uuid;

/// A buyer's billing records, newest billing date first.
///
/// The buyer must exist. When `limit` is omitted the configured page size
/// applies.
pub async fn payment_history(
    pool: &sqlx::AnyPool,
    buyer_id: Uuid,
    limit: Option<i64>,
    offset: i64,
) -> MarketResult<Vec<BillingRecord>> {
    buyers::find_by_id(pool, buyer_id)
        .await?
        .ok_or_else(|| MarketError::not_found("Buyer"))?;
    let limit = limit.unwrap_or_else(config::payment_history_page_size);
    Ok(billing::payment_history(pool, buyer_id, limit, offset).await?)
}
