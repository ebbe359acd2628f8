//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate holds the receipt pipeline as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   bytes ──► parser ──► RawReceipt ──► normalize ──► Receipt     │   │
//! │  │               │                           │                     │   │
//! │  │          validation                    points                   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (ReceiptStore trait)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire and domain types (RawReceipt, Receipt, ReceiptId, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`parser`] - Decodes JSON bytes into a validated [`RawReceipt`]
//! - [`validation`] - Field format rules
//! - [`normalize`] - RawReceipt → Receipt, plus the total cross-check
//! - [`points`] - The seven scoring rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{normalize, parse_receipt, verify_total};
//!
//! let body = br#"{
//!     "retailer": "M&M Corner Market",
//!     "purchaseDate": "2022-03-15",
//!     "purchaseTime": "14:30",
//!     "total": "9.00",
//!     "items": [
//!         {"shortDescription": "Gum", "price": "1.00"},
//!         {"shortDescription": "Gatorade", "price": "8.00"}
//!     ]
//! }"#;
//!
//! let raw = parse_receipt(body).unwrap();
//! let receipt = normalize(&raw).unwrap();
//! verify_total(&receipt).unwrap();
//!
//! assert_eq!(receipt.points, 111);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod normalize;
pub mod parser;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, NormalizationError, ParseError, ParseMoneyError, ValidationError};
pub use money::Money;
pub use normalize::{normalize, verify_total};
pub use parser::parse_receipt;
pub use points::{breakdown, score, PointsBreakdown};
pub use types::*;
