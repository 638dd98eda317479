//! Number Lifecycle Engine.
//!
//! The state machine is deliberately permissive: any status may move to any
//! other status, and no forbidden-edge guard exists. What the engine *does*
//! enforce are the derived field rules, applied atomically with the status
//! write:
//!
//! - `completed` sets `completed_at`; every other status clears it
//! - `cancelled` and `returned_to_queue` release the number back to the
//!   pool, erasing `buyer_id` and `rented_at`
//! - `available`, `rented`, and `accepted` never touch the ownership fields;
//!   populating them is the rental-assignment path's job
//! - `updated_at` always advances

use chrono::Utc;
use numrent_common::error::{MarketError, MarketResult};
use numrent_common::models::number::{Number, NumberStatus};
use numrent_db::repository::numbers;
use uuid::Uuid;

/// Move a number to `new_status`, deriving the dependent fields.
///
/// Returns the full updated row; `NotFound` when no number has the id.
pub async fn update_number_status(
    pool: &sqlx::AnyPool,
    id: Uuid,
    new_status: NumberStatus,
) -> MarketResult<Number> {
    let now = Utc::now();
    let completed_at = (new_status == NumberStatus::Completed).then_some(now);
    let release_rental = new_status.releases_rental();

    let updated =
        numbers::apply_status_change(pool, id, new_status, completed_at, release_rental, now)
            .await?
            .ok_or_else(|| MarketError::not_found("Number"))?;

    tracing::debug!(number_id = %id, status = %new_status, "number status updated");
    Ok(updated)
}
