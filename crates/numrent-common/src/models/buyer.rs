//! Buyer model — the renting side of the marketplace.
//!
//! Buyers rent numbers from sellers. A banned buyer keeps its record and its
//! history; the flag only blocks future rentals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Rental cap applied when buyer registration does not supply one.
/// Mirrors the schema default.
pub const DEFAULT_MAX_NUMBERS_PER_BRANCH: i32 = 10;

/// A buyer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    /// Unique buyer ID (UUID v7 — time-sortable)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Suspension flag — set by moderation or by stopwork
    pub is_banned: bool,

    /// Reason recorded when the ban was applied.
    /// May be the empty string when a moderator bans with no comment;
    /// stopwork always writes its fixed reason.
    pub ban_reason: Option<String>,

    /// Operating mode (free-form tag understood by the bot layer)
    pub mode: String,

    /// External chat identifier (unique)
    pub chat_id: String,

    /// Rental cap per branch
    pub max_numbers_per_branch: i32,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update
    pub updated_at: DateTime<Utc>,
}

/// Buyer registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBuyerRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 64, message = "Mode must be 1-64 characters"))]
    pub mode: String,

    #[validate(length(min = 1, max = 64, message = "Chat ID must be 1-64 characters"))]
    pub chat_id: String,

    /// Rental cap; falls back to the configured default when omitted.
    #[validate(range(min = 1, message = "Rental cap must be at least 1"))]
    pub max_numbers_per_branch: Option<i32>,
}

/// Partial buyer update — omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBuyerRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub mode: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub chat_id: Option<String>,

    #[validate(range(min = 1))]
    pub max_numbers_per_branch: Option<i32>,
}

/// Result of a stopwork run.
///
/// Stopwork's precondition failures (unknown buyer, already banned) are
/// expected outcomes of normal operation, so they surface here as
/// `success: false` rather than as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopworkOutcome {
    pub success: bool,
    pub message: String,
}
