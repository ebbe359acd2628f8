//! # Domain Types
//!
//! Wire and domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   WIRE (strings, validated)            DOMAIN (typed, scored)           │
//! │  ┌─────────────────────┐   normalize  ┌─────────────────────┐          │
//! │  │    RawReceipt       │ ───────────► │      Receipt        │          │
//! │  │  retailer           │              │  id (ReceiptId)     │          │
//! │  │  purchaseDate       │              │  retailer           │          │
//! │  │  purchaseTime       │              │  purchased_at       │          │
//! │  │  total   "9.00"     │              │  total (Money)      │          │
//! │  │  items [RawItem]    │              │  items [Item]       │          │
//! │  └─────────────────────┘              │  points (frozen)    │          │
//! │                                       └─────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Receipt Identifier
// =============================================================================

/// Identifier assigned to a receipt at normalization time.
///
/// ## Why UUID v4?
/// Random 122-bit identifiers make collisions practically impossible, but
/// the store still rejects a duplicate rather than trusting that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn new_random() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ReceiptId(uuid)
    }

    /// Returns the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ReceiptId)
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// A line item as submitted, after field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub short_description: String,
    pub price: String,
}

/// A receipt as submitted, after field validation.
///
/// Only [`parse_receipt`](crate::parse_receipt) guarantees the format rules;
/// a hand-built value may still fail in [`normalize`](crate::normalize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<RawItem>,
}

// =============================================================================
// Domain Types
// =============================================================================

/// A normalized line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Description exactly as submitted (trimmed only when scoring).
    pub short_description: String,

    /// Price in fixed-point cents.
    pub price: Money,
}

/// A fully validated and scored receipt.
///
/// ## Invariants
/// - `id` is assigned once, at normalization
/// - `points` is computed once, at normalization, and never recomputed
/// - stored receipts satisfy `sum(items.price) == total`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: ReceiptId,
    pub retailer: String,

    /// Purchase date and time combined, with no timezone attached.
    pub purchased_at: NaiveDateTime,

    pub total: Money,
    pub items: Vec<Item>,
    pub points: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
