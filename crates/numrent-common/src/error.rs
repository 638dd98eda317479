//! Centralized error types for numrent.
//!
//! Uses `thiserror` for ergonomic error definitions. Two domain outcomes
//! cover the whole core: a referenced row does not exist (`NotFound`), or an
//! operation is rejected by current state (`Conflict`). Storage failures
//! propagate unchanged — nothing in the core retries.

/// Core application error type used across all numrent services.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    // === Resource errors ===
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{resource} already exists")]
    AlreadyExists { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    // === Validation errors ===
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // === Infrastructure errors ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl MarketError {
    /// Build a `NotFound` for a named resource, e.g. `MarketError::not_found("Buyer")`.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Error code string for programmatic handling by callers.
    pub fn error_code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyExists { .. } => "ALREADY_EXISTS",
            Self::Conflict { .. } => "CONFLICT",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convenience type alias for Results using MarketError.
pub type MarketResult<T> = Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_resource() {
        let err = MarketError::not_found("Buyer");
        assert_eq!(err.to_string(), "Buyer not found");
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_database_errors_map_to_database_code() {
        let err = MarketError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
