//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptStore::put / get                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipt-api) ← 404 / 409 / opaque 500                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipt_core::ReceiptId;
use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A receipt with this identifier is already stored.
    ///
    /// ## When This Occurs
    /// - Two submissions generated the same UUID (practically never)
    /// - The same `Receipt` value is put twice
    #[error("Receipt already exists with ID \"{0}\"")]
    AlreadyExists(ReceiptId),

    /// No receipt is stored under this identifier.
    #[error("No receipt with ID \"{0}\"")]
    NotFound(ReceiptId),

    /// The lock guarding the map was poisoned by a panicking writer.
    #[error("Receipt store lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
