//! Filter Engine — combinable search over the inventory.

use numrent_common::error::MarketResult;
use numrent_common::models::number::{Number, NumberFilter};
use numrent_db::repository::numbers;

/// Numbers matching every provided criterion.
///
/// An empty filter returns the whole inventory. Result order is
/// unspecified — callers needing an order must sort, and tests compare sets.
pub async fn filter_numbers(
    pool: &sqlx::AnyPool,
    filter: &NumberFilter,
) -> MarketResult<Vec<Number>> {
    Ok(numbers::filter_numbers(pool, filter).await?)
}
