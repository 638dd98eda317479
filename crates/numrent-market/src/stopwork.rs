//! Suspension Controller — stopwork.
//!
//! Stopwork bans a buyer and reclaims every number they hold in `accepted`
//! status, as one logical unit. Inventory the buyer is actively using
//! (`rented`) or has finished with (`completed`) is left alone: stopwork
//! takes back what was provisionally claimed but not yet in use.

use chrono::Utc;
use numrent_common::error::MarketResult;
use numrent_common::models::buyer::StopworkOutcome;
use numrent_db::repository::{buyers, numbers};
use uuid::Uuid;

/// Reason written on the buyer record by every stopwork ban.
pub const STOPWORK_BAN_REASON: &str =
    "Stopwork applied - automatic ban to prevent future rentals";

/// Ban a buyer and reclaim their `accepted` numbers atomically.
///
/// The precondition failures (unknown buyer, already banned) are expected
/// outcomes and come back as `success: false` with nothing mutated. The
/// reclamation and the ban commit together or not at all — a buyer is never
/// left banned while still holding accepted numbers, nor the reverse.
pub async fn stopwork_buyer(pool: &sqlx::AnyPool, buyer_id: Uuid) -> MarketResult<StopworkOutcome> {
    let mut tx = pool.begin().await?;

    // Gates run inside the transaction: the banned check read outside it
    // could go stale under a concurrent stopwork. Dropping the transaction
    // on an early return rolls back (nothing has been written yet).
    let Some(buyer) = buyers::find_by_id(&mut *tx, buyer_id).await? else {
        return Ok(StopworkOutcome {
            success: false,
            message: format!("Buyer with ID {buyer_id} not found."),
        });
    };

    if buyer.is_banned {
        return Ok(StopworkOutcome {
            success: false,
            message: format!("Buyer {buyer_id} is already banned and cannot have stopwork applied."),
        });
    }

    let now = Utc::now();
    let reclaimed = numbers::reclaim_accepted(&mut *tx, buyer_id, now).await?;
    buyers::set_ban(&mut *tx, buyer_id, true, Some(STOPWORK_BAN_REASON), now).await?;

    tx.commit().await?;

    tracing::info!(%buyer_id, reclaimed, "stopwork applied");

    let message = if reclaimed > 0 {
        format!(
            "Stopwork completed for buyer {buyer_id}. {reclaimed} accepted numbers moved to queue and buyer banned."
        )
    } else {
        format!(
            "Stopwork completed for buyer {buyer_id}. No accepted numbers found, buyer banned to prevent future rentals."
        )
    };

    Ok(StopworkOutcome {
        success: true,
        message,
    })
}
