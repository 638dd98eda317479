//! Manual moderation — explicit buyer and seller bans.
//!
//! Unlike stopwork these touch a single row and carry a caller-supplied
//! reason. An empty reason is stored verbatim — the core does not second-
//! guess the moderator.

use chrono::Utc;
use numrent_common::error::{MarketError, MarketResult};
use numrent_common::models::buyer::Buyer;
use numrent_common::models::seller::{Seller, SellerStatus};
use numrent_db::repository::{buyers, sellers};
use uuid::Uuid;

/// Comment written when a seller is banned without one.
pub const DEFAULT_SELLER_BAN_COMMENT: &str = "Banned by administrator";

/// Ban a buyer with the given reason, verbatim.
pub async fn ban_buyer(pool: &sqlx::AnyPool, id: Uuid, ban_reason: &str) -> MarketResult<Buyer> {
    let buyer = buyers::set_ban(pool, id, true, Some(ban_reason), Utc::now())
        .await?
        .ok_or_else(|| MarketError::not_found("Buyer"))?;
    tracing::info!(buyer_id = %id, "buyer banned");
    Ok(buyer)
}

/// Lift a buyer's ban, clearing the recorded reason.
pub async fn unban_buyer(pool: &sqlx::AnyPool, id: Uuid) -> MarketResult<Buyer> {
    let buyer = buyers::set_ban(pool, id, false, None, Utc::now())
        .await?
        .ok_or_else(|| MarketError::not_found("Buyer"))?;
    tracing::info!(buyer_id = %id, "buyer unbanned");
    Ok(buyer)
}

/// Ban a seller, defaulting the status comment when none is given.
pub async fn ban_seller(
    pool: &sqlx::AnyPool,
    id: Uuid,
    status_comment: Option<&str>,
) -> MarketResult<Seller> {
    let comment = match status_comment {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_SELLER_BAN_COMMENT,
    };
    let seller = sellers::update_seller(pool, id, Some(SellerStatus::Banned), Some(comment), None)
        .await?
        .ok_or_else(|| MarketError::not_found("Seller"))?;
    tracing::info!(seller_id = %id, "seller banned");
    Ok(seller)
}
