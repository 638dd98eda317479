//! Seller model — the supply side of the marketplace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// A seller account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller ID (UUID v7 — time-sortable)
    pub id: Uuid,

    /// External Telegram identifier (unique)
    pub telegram_id: String,

    /// Moderation status
    pub status: SellerStatus,

    /// Free-text comment attached to the current status
    pub status_comment: Option<String>,

    /// Accumulated rounding bonus, fixed-point with two decimals
    pub permanent_rounding_bonus: Decimal,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update
    pub updated_at: DateTime<Utc>,
}

/// Seller moderation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerStatus {
    Active,
    Inactive,
    Banned,
}

impl SellerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Banned => "banned",
        }
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SellerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "banned" => Ok(Self::Banned),
            other => Err(format!("unknown seller status '{other}'")),
        }
    }
}

/// Seller registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSellerRequest {
    #[validate(length(min = 1, max = 64, message = "Telegram ID must be 1-64 characters"))]
    pub telegram_id: String,

    /// Starting rounding bonus; zero when omitted.
    pub permanent_rounding_bonus: Option<Decimal>,
}

/// Partial seller update — omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSellerRequest {
    pub status: Option<SellerStatus>,

    #[validate(length(max = 256))]
    pub status_comment: Option<String>,

    pub permanent_rounding_bonus: Option<Decimal>,
}
