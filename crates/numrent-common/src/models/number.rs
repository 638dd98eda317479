//! Number model — the rentable phone-number resource and its lifecycle.
//!
//! A number moves `available → rented → accepted → completed`, with
//! `cancelled` and `returned_to_queue` as recovery states that put it back
//! in the pool. The engine is deliberately permissive: any status may move
//! to any other status, and the derived field changes depend only on the
//! target status (see `numrent-market::lifecycle`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use uuid::Uuid;
use validator::Validate;

/// A rentable phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Number {
    /// Unique number ID (UUID v7 — time-sortable)
    pub id: Uuid,

    /// The phone number itself (unique)
    pub phone_number: String,

    /// Country tag, e.g. "US"
    pub country: String,

    /// Number type (free-form tag, e.g. "virtual" or "physical")
    #[serde(rename = "type")]
    pub number_type: String,

    /// Lifecycle status
    pub status: NumberStatus,

    /// Weak reference to the renting buyer — lookup only, no ownership
    pub buyer_id: Option<Uuid>,

    /// Weak reference to the supplying seller — lookup only, no ownership
    pub seller_id: Option<Uuid>,

    /// When the current rental started
    pub rented_at: Option<DateTime<Utc>>,

    /// When the rental completed; only set while status is `completed`
    pub completed_at: Option<DateTime<Utc>>,

    /// Rental price, fixed-point with two decimals
    pub price: Decimal,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update
    pub updated_at: DateTime<Utc>,
}

/// Number lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStatus {
    /// In the pool, rentable
    Available,
    /// Handed to a buyer, rental not yet confirmed
    Rented,
    /// Buyer confirmed the rental
    Accepted,
    /// Rental finished
    Completed,
    /// Rental aborted; the number goes back to the pool
    Cancelled,
    /// Reclaimed by administration; the number goes back to the pool
    ReturnedToQueue,
}

impl NumberStatus {
    pub const ALL: [NumberStatus; 6] = [
        Self::Available,
        Self::Rented,
        Self::Accepted,
        Self::Completed,
        Self::Cancelled,
        Self::ReturnedToQueue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Rented => "rented",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::ReturnedToQueue => "returned_to_queue",
        }
    }

    /// Whether entering this status releases the number back to the pool,
    /// erasing the buyer reference and the rental timestamp.
    pub fn releases_rental(&self) -> bool {
        matches!(self, Self::Cancelled | Self::ReturnedToQueue)
    }
}

impl fmt::Display for NumberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "rented" => Ok(Self::Rented),
            "accepted" => Ok(Self::Accepted),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "returned_to_queue" => Ok(Self::ReturnedToQueue),
            other => Err(format!("unknown number status '{other}'")),
        }
    }
}

/// Search criteria over numbers.
///
/// Every field is independently optional; provided fields are combined with
/// logical AND. An empty filter matches every number. Result order is
/// unspecified — callers must not rely on it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumberFilter {
    /// Exact match
    pub country: Option<String>,

    /// Exact match
    #[serde(rename = "type")]
    pub number_type: Option<String>,

    /// Exact match
    pub status: Option<NumberStatus>,

    /// Exact match
    pub buyer_id: Option<Uuid>,

    /// Exact match
    pub seller_id: Option<Uuid>,

    /// Case-insensitive substring match
    pub phone_number: Option<String>,
}

/// Number intake request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNumberRequest {
    #[validate(regex(
        path = *PHONE_REGEX,
        message = "Phone number must be digits with an optional leading '+'"
    ))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 64, message = "Country must be 1-64 characters"))]
    pub country: String,

    #[validate(length(min = 1, max = 64, message = "Type must be 1-64 characters"))]
    #[serde(rename = "type")]
    pub number_type: String,

    pub price: Decimal,

    /// Supplying seller, when known at intake time.
    pub seller_id: Option<Uuid>,
}

static PHONE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[0-9]{5,20}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in NumberStatus::ALL {
            assert_eq!(status.as_str().parse::<NumberStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("expired".parse::<NumberStatus>().is_err());
    }

    #[test]
    fn test_only_recovery_states_release_the_rental() {
        assert!(NumberStatus::Cancelled.releases_rental());
        assert!(NumberStatus::ReturnedToQueue.releases_rental());
        for status in [
            NumberStatus::Available,
            NumberStatus::Rented,
            NumberStatus::Accepted,
            NumberStatus::Completed,
        ] {
            assert!(!status.releases_rental());
        }
    }

    #[test]
    fn test_filter_defaults_to_no_constraints() {
        let filter = NumberFilter::default();
        assert!(filter.country.is_none());
        assert!(filter.status.is_none());
        assert!(filter.phone_number.is_none());
    }
}
