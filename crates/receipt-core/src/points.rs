//! # Points Engine
//!
//! Pure scoring of a normalized [`Receipt`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                                             Points            │
//! │  ─  ───────────────────────────────────────────────  ────────────────  │
//! │  1  alphanumeric characters in retailer name         +1 each           │
//! │  2  total has no cents                               +50               │
//! │  3  total is a multiple of 0.25                      +25               │
//! │  4  every two items                                  +5 per pair       │
//! │  5  trimmed description length % 3 == 0              +ceil(price×0.2)  │
//! │  6  purchase day is odd                              +6                │
//! │  7  purchase time after 14:00 and before 16:00       +10               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are independent and additive; 2 and 3 can both apply.
//!
//! Every sum is checked. Prices are range-checked one at a time, so a long
//! list of very large prices can still push rule 5 past `i64`; scoring then
//! yields `None` instead of wrapping.

use chrono::Datelike;
use serde::Serialize;

use crate::types::Receipt;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer_name: i64,
    pub round_dollar: i64,
    pub quarter_multiple: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    /// Sum of every rule, or `None` on overflow.
    pub fn total(&self) -> Option<i64> {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0i64, i64::checked_add)
    }
}

/// Scores a receipt.
///
/// ## Example
/// ```rust
/// use receipt_core::{normalize, score, RawItem, RawReceipt};
///
/// let raw = RawReceipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-15".to_string(),
///     purchase_time: "14:30".to_string(),
///     total: "9.00".to_string(),
///     items: vec![
///         RawItem { short_description: "Gum".to_string(), price: "1.00".to_string() },
///         RawItem { short_description: "Gatorade".to_string(), price: "8.00".to_string() },
///     ],
/// };
///
/// let receipt = normalize(&raw).unwrap();
/// assert_eq!(score(&receipt), Some(111));
/// ```
pub fn score(receipt: &Receipt) -> Option<i64> {
    breakdown(receipt)?.total()
}

/// Computes each rule separately, or `None` if rule 5 overflows.
pub fn breakdown(receipt: &Receipt) -> Option<PointsBreakdown> {
    Some(PointsBreakdown {
        retailer_name: retailer_name_points(receipt),
        round_dollar: round_dollar_points(receipt),
        quarter_multiple: quarter_multiple_points(receipt),
        item_pairs: item_pair_points(receipt),
        item_descriptions: item_description_points(receipt)?,
        odd_day: odd_day_points(receipt),
        afternoon: afternoon_points(receipt),
    })
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_name_points(receipt: &Receipt) -> i64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as i64
}

fn round_dollar_points(receipt: &Receipt) -> i64 {
    if receipt.total.is_whole() {
        50
    } else {
        0
    }
}

fn quarter_multiple_points(receipt: &Receipt) -> i64 {
    if receipt.total.is_multiple_of(25) {
        25
    } else {
        0
    }
}

fn item_pair_points(receipt: &Receipt) -> i64 {
    (receipt.items.len() / 2) as i64 * 5
}

fn item_description_points(receipt: &Receipt) -> Option<i64> {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| item.price.fifth_rounded_up())
        .try_fold(0i64, i64::checked_add)
}

fn odd_day_points(receipt: &Receipt) -> i64 {
    if receipt.purchased_at.day() % 2 == 1 {
        6
    } else {
        0
    }
}

/// The window is built from the receipt's own date: (14:00, 16:00) exclusive.
fn afternoon_points(receipt: &Receipt) -> i64 {
    let at = receipt.purchased_at;
    let date = at.date();

    match (date.and_hms_opt(14, 0, 0), date.and_hms_opt(16, 0, 0)) {
        (Some(start), Some(end)) if start < at && at < end => 10,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
