//! Validated intake and upkeep — new buyers, sellers, and numbers, plus the
//! partial account updates.
//!
//! Thin orchestration over the gateway primitives: validate the request,
//! check the unique external key, fill defaults, write.

use numrent_common::config;
use numrent_common::error::{MarketError, MarketResult};
use numrent_common::models::buyer::{Buyer, CreateBuyerRequest, UpdateBuyerRequest};
use numrent_common::models::number::{CreateNumberRequest, Number};
use numrent_common::models::seller::{CreateSellerRequest, Seller, UpdateSellerRequest};
use numrent_common::validation::validate_request;
use numrent_db::repository::{buyers, numbers, sellers};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Register a buyer. The chat identifier must be unused.
pub async fn create_buyer(pool: &sqlx::AnyPool, req: &CreateBuyerRequest) -> MarketResult<Buyer> {
    validate_request(req)?;

    if buyers::find_by_chat_id(pool, &req.chat_id).await?.is_some() {
        return Err(MarketError::AlreadyExists {
            resource: "Chat ID".into(),
        });
    }

    let cap = req
        .max_numbers_per_branch
        .unwrap_or_else(config::default_max_numbers_per_branch);
    let buyer = buyers::create_buyer(
        pool,
        Uuid::now_v7(),
        &req.name,
        &req.mode,
        &req.chat_id,
        cap,
    )
    .await?;

    tracing::info!(buyer_id = %buyer.id, "buyer registered");
    Ok(buyer)
}

/// Update a buyer account; omitted fields keep their stored value.
///
/// A new chat identifier must not belong to another buyer.
pub async fn update_buyer(
    pool: &sqlx::AnyPool,
    id: Uuid,
    req: &UpdateBuyerRequest,
) -> MarketResult<Buyer> {
    validate_request(req)?;

    if let Some(chat_id) = &req.chat_id {
        if let Some(holder) = buyers::find_by_chat_id(pool, chat_id).await? {
            if holder.id != id {
                return Err(MarketError::AlreadyExists {
                    resource: "Chat ID".into(),
                });
            }
        }
    }

    let buyer = buyers::update_buyer(
        pool,
        id,
        req.name.as_deref(),
        req.mode.as_deref(),
        req.chat_id.as_deref(),
        req.max_numbers_per_branch,
    )
    .await?
    .ok_or_else(|| MarketError::not_found("Buyer"))?;

    tracing::info!(buyer_id = %id, "buyer updated");
    Ok(buyer)
}

/// Register a seller. The Telegram identifier must be unused.
pub async fn create_seller(pool: &sqlx::AnyPool, req: &CreateSellerRequest) -> MarketResult<Seller> {
    validate_request(req)?;

    if sellers::find_by_telegram_id(pool, &req.telegram_id)
        .await?
        .is_some()
    {
        return Err(MarketError::AlreadyExists {
            resource: "Telegram ID".into(),
        });
    }

    let bonus = req.permanent_rounding_bonus.unwrap_or(Decimal::ZERO);
    let seller = sellers::create_seller(pool, Uuid::now_v7(), &req.telegram_id, bonus).await?;

    tracing::info!(seller_id = %seller.id, "seller registered");
    Ok(seller)
}

/// Update a seller account; omitted fields keep their stored value.
pub async fn update_seller(
    pool: &sqlx::AnyPool,
    id: Uuid,
    req: &UpdateSellerRequest,
) -> MarketResult<Seller> {
    validate_request(req)?;

    let seller = sellers::update_seller(
        pool,
        id,
        req.status,
        req.status_comment.as_deref(),
        req.permanent_rounding_bonus,
    )
    .await?
    .ok_or_else(|| MarketError::not_found("Seller"))?;

    tracing::info!(seller_id = %id, "seller updated");
    Ok(seller)
}

/// Add a number to the pool. The phone number must be unused.
pub async fn create_number(pool: &sqlx::AnyPool, req: &CreateNumberRequest) -> MarketResult<Number> {
    validate_request(req)?;

    if numbers::find_by_phone_number(pool, &req.phone_number)
        .await?
        .is_some()
    {
        return Err(MarketError::AlreadyExists {
            resource: "Phone number".into(),
        });
    }

    let number = numbers::create_number(
        pool,
        Uuid::now_v7(),
        &req.phone_number,
        &req.country,
        &req.number_type,
        req.price,
        req.seller_id,
    )
    .await?;

    tracing::info!(number_id = %number.id, "number added to pool");
    Ok(number)
}
