//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ParseError          - Envelope + field failures (parser)          │
//! │  │   └── ValidationError - Missing / malformed fields                  │
//! │  ├── NormalizationError  - String → typed conversion failures          │
//! │  ├── CoreError           - Business rule violations (total mismatch)   │
//! │  └── ParseMoneyError     - Fixed-point amount parsing                  │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError          - AlreadyExists / NotFound                    │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError            - What HTTP clients see (code + message)      │
//! │                                                                         │
//! │  Flow: ParseError / CoreError / StoreError → ApiError → Response       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Parse Error
// =============================================================================

/// Failures while turning submitted bytes into a [`RawReceipt`](crate::RawReceipt).
///
/// The first three variants are about the envelope itself; `Validation`
/// means the JSON was fine but the receipt fields were not.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No bytes (or only whitespace) were submitted.
    #[error("Request body is empty")]
    EmptyBody,

    /// The bytes are not well-formed JSON.
    #[error("Request body JSON has bad syntax at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    /// Well-formed JSON, but a field has the wrong JSON type.
    ///
    /// ## Example
    /// `{"total": 9.00}` where a string was expected.
    #[error("Request body has an invalid value: {message}")]
    InvalidValue { message: String },

    /// Missing or malformed receipt fields.
    #[error("Receipt error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
///
/// Every variant lists *all* offending field names, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more top-level fields are absent.
    #[error("missing fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    /// One or more top-level fields do not match their format.
    #[error("invalid fields: {}", .fields.join(", "))]
    InvalidFields { fields: Vec<&'static str> },

    /// An item is missing fields.
    #[error("missing fields in item {index}: {}", .fields.join(", "))]
    MissingItemFields {
        index: usize,
        fields: Vec<&'static str>,
    },

    /// An item has malformed fields.
    #[error("invalid fields in item {index}: {}", .fields.join(", "))]
    InvalidItemFields {
        index: usize,
        fields: Vec<&'static str>,
    },
}

impl ValidationError {
    /// Returns the offending field names.
    pub fn fields(&self) -> &[&'static str] {
        match self {
            ValidationError::MissingFields { fields }
            | ValidationError::InvalidFields { fields }
            | ValidationError::MissingItemFields { fields, .. }
            | ValidationError::InvalidItemFields { fields, .. } => fields,
        }
    }
}

// =============================================================================
// Normalization Error
// =============================================================================

/// A field passed (or skipped) validation but cannot be converted, or the
/// converted receipt cannot be scored.
///
/// Receipts produced by [`parse_receipt`](crate::parse_receipt) only hit
/// `PointsOverflow`; the rest remain reachable when a `RawReceipt` is built
/// by hand.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("'{value}' is not a valid purchase date")]
    InvalidDate { value: String },

    #[error("'{value}' is not a valid purchase time")]
    InvalidTime { value: String },

    #[error("invalid amount in '{field}': {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: ParseMoneyError,
    },

    /// Each price fits, but the points they earn together do not.
    #[error("points for this receipt are too large to represent")]
    PointsOverflow,
}

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised after normalization.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item prices do not add up to the receipt total.
    ///
    /// ## User Workflow
    /// ```text
    /// items: 5.00 + 5.01 = 10.01
    /// total: 10.00
    ///      │
    ///      ▼
    /// TotalMismatch { expected: 10.00, actual: 10.01 }
    ///      │
    ///      ▼
    /// 400 "Receipt error: wrong value in 'total' ..."
    /// ```
    #[error("Receipt error: wrong value in 'total' (items sum to {actual}, total is {expected})")]
    TotalMismatch { expected: Money, actual: Money },

    /// Item prices cannot be summed without overflowing.
    #[error("Receipt error: item prices are too large to sum")]
    SumOverflow,

    /// Normalization failed (wraps NormalizationError).
    #[error("Receipt error: {0}")]
    Normalization(#[from] NormalizationError),
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failures parsing a `D.CC` string into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("'{0}' is not a two-decimal amount")]
    InvalidFormat(String),

    #[error("'{0}' is out of range")]
    Overflow(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
