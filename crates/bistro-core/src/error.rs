//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bistro-core errors (this file)                                     │
//! │  ├── CoreError        - Billing / catalog domain errors             │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  bistro-db errors (separate crate)                                  │
//! │  └── DbError          - Persistence failures, wraps CoreError for   │
//! │                         orders the store refuses to write           │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → caller               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, quantity, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent billing rule violations or catalog failures. Every
/// one of them is raised before any state is mutated, so the caller can
/// always retry with corrected input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Totals were requested for a bill with no lines.
    ///
    /// Zero-item bills are rejected upstream, never computed.
    #[error("cannot compute totals for an empty cart")]
    EmptyCart,

    /// Menu lookup failed; the name does not exist in the catalog.
    #[error("menu item not found: {0}")]
    ItemNotFound(String),

    /// The menu bootstrap source is structurally unusable (e.g. the required
    /// name/price columns are entirely absent). Fatal to the load only; any
    /// previously loaded catalog is untouched.
    #[error("malformed menu source: {0}")]
    MenuFormat(String),

    /// An order's stated totals disagree with its lines. The store refuses
    /// such orders before writing a single row.
    #[error("order totals do not match its lines")]
    InconsistentTotals,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements; used for early
/// validation before billing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ItemNotFound("Sushi".to_string()).to_string(),
            "menu item not found: Sushi"
        );
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "cannot compute totals for an empty cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
