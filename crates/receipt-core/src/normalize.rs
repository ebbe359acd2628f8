//! # Normalizer
//!
//! Converts a validated [`RawReceipt`] into a scored [`Receipt`], and back.
//!
//! ## Pipeline Position
//! ```text
//! RawReceipt ──► normalize() ──► Receipt { id, points, .. } ──► verify_total()
//!                   │                                               │
//!                   ├── parse date + time → NaiveDateTime           └── CoreError::TotalMismatch
//!                   ├── parse amounts → Money
//!                   ├── ReceiptId::new_random()
//!                   └── points::score() (exactly once, PointsOverflow if unrepresentable)
//! ```
//!
//! The total cross-check lives in [`verify_total`], outside `normalize`, because
//! it compares normalized amounts rather than raw strings.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::{CoreError, CoreResult, NormalizationError};
use crate::money::Money;
use crate::points;
use crate::types::{Item, RawItem, RawReceipt, Receipt, ReceiptId};
use crate::validation::{DATE_FORMAT, TIME_FORMAT};

/// Normalizes and scores a receipt.
///
/// ## Example
/// ```rust
/// use receipt_core::{normalize, RawItem, RawReceipt};
///
/// let raw = RawReceipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "13:13".to_string(),
///     total: "1.25".to_string(),
///     items: vec![RawItem {
///         short_description: "Pepsi - 12-oz".to_string(),
///         price: "1.25".to_string(),
///     }],
/// };
///
/// let receipt = normalize(&raw).unwrap();
/// assert_eq!(receipt.total.cents(), 125);
/// assert_eq!(receipt.points, 31);
/// ```
pub fn normalize(raw: &RawReceipt) -> Result<Receipt, NormalizationError> {
    let date = NaiveDate::parse_from_str(&raw.purchase_date, DATE_FORMAT).map_err(|_| {
        NormalizationError::InvalidDate {
            value: raw.purchase_date.clone(),
        }
    })?;
    let time = NaiveTime::parse_from_str(&raw.purchase_time, TIME_FORMAT).map_err(|_| {
        NormalizationError::InvalidTime {
            value: raw.purchase_time.clone(),
        }
    })?;

    let total = parse_amount("total", &raw.total)?;
    let items = raw
        .items
        .iter()
        .map(|item| -> Result<Item, NormalizationError> {
            Ok(Item {
                short_description: item.short_description.clone(),
                price: parse_amount("price", &item.price)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut receipt = Receipt {
        id: ReceiptId::new_random(),
        retailer: raw.retailer.clone(),
        purchased_at: NaiveDateTime::new(date, time),
        total,
        items,
        points: 0,
    };
    receipt.points = points::score(&receipt).ok_or(NormalizationError::PointsOverflow)?;

    debug!(id = %receipt.id, points = receipt.points, "Receipt normalized");

    Ok(receipt)
}

/// Checks that item prices add up to the receipt total.
///
/// ## Example
/// ```rust
/// use receipt_core::{normalize, verify_total, CoreError, RawItem, RawReceipt};
///
/// let raw = RawReceipt {
///     retailer: "Walgreens".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "08:13".to_string(),
///     total: "10.00".to_string(),
///     items: vec![
///         RawItem { short_description: "Pepsi".to_string(), price: "5.00".to_string() },
///         RawItem { short_description: "Dasani".to_string(), price: "5.01".to_string() },
///     ],
/// };
///
/// let receipt = normalize(&raw).unwrap();
/// assert!(matches!(verify_total(&receipt), Err(CoreError::TotalMismatch { .. })));
/// ```
pub fn verify_total(receipt: &Receipt) -> CoreResult<()> {
    let actual = Money::checked_sum(receipt.items.iter().map(|item| item.price))
        .ok_or(CoreError::SumOverflow)?;

    if actual != receipt.total {
        return Err(CoreError::TotalMismatch {
            expected: receipt.total,
            actual,
        });
    }

    Ok(())
}

fn parse_amount(field: &'static str, value: &str) -> Result<Money, NormalizationError> {
    value
        .parse()
        .map_err(|source| NormalizationError::InvalidAmount { field, source })
}

// =============================================================================
// Denormalization
// =============================================================================

/// Projects a stored receipt back into its wire document.
///
/// Descriptions are returned untrimmed, amounts as `D.CC`, the date as
/// `YYYY-MM-DD` and the time as `HH:MM`.
impl From<&Receipt> for RawReceipt {
    fn from(receipt: &Receipt) -> Self {
        RawReceipt {
            retailer: receipt.retailer.clone(),
            purchase_date: receipt.purchased_at.format(DATE_FORMAT).to_string(),
            purchase_time: receipt.purchased_at.format(TIME_FORMAT).to_string(),
            total: receipt.total.to_string(),
            items: receipt
                .items
                .iter()
                .map(|item| RawItem {
                    short_description: item.short_description.clone(),
                    price: item.price.to_string(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_receipt;

    fn raw(total: &str, prices: &[&str]) -> RawReceipt {
        RawReceipt {
            retailer: "Corner Shop".to_string(),
            purchase_date: "2022-03-15".to_string(),
            purchase_time: "09:05".to_string(),
            total: total.to_string(),
            items: prices
                .iter()
                .map(|price| RawItem {
                    short_description: " Item ".to_string(),
                    price: price.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_normalize_converts_fields() {
        let receipt = normalize(&raw("3.50", &["1.25", "2.25"])).unwrap();

        assert_eq!(receipt.purchased_at.to_string(), "2022-03-15 09:05:00");
        assert_eq!(receipt.total, Money::from_cents(350));
        assert_eq!(receipt.items[1].price, Money::from_cents(225));
        assert_eq!(receipt.items[0].short_description, " Item ");
    }

    #[test]
    fn test_points_frozen_at_normalization() {
        let receipt = normalize(&raw("3.50", &["1.25", "2.25"])).unwrap();
        assert_eq!(Some(receipt.points), points::score(&receipt));
    }

    #[test]
    fn test_each_normalization_gets_a_new_id() {
        let input = raw("1.00", &["1.00"]);
        assert_ne!(normalize(&input).unwrap().id, normalize(&input).unwrap().id);
    }

    #[test]
    fn test_unvalidated_input_fails_cleanly() {
        let mut bad_date = raw("1.00", &["1.00"]);
        bad_date.purchase_date = "2022-02-30".to_string();
        assert!(matches!(
            normalize(&bad_date),
            Err(NormalizationError::InvalidDate { .. })
        ));

        let mut bad_time = raw("1.00", &["1.00"]);
        bad_time.purchase_time = "25:00".to_string();
        assert!(matches!(
            normalize(&bad_time),
            Err(NormalizationError::InvalidTime { .. })
        ));

        let bad_price = raw("1.00", &["1"]);
        assert!(matches!(
            normalize(&bad_price),
            Err(NormalizationError::InvalidAmount { field: "price", .. })
        ));
    }

    #[test]
    fn test_points_overflow_is_an_error() {
        let body = serde_json::json!({
            "retailer": "Corner Shop",
            "purchaseDate": "2022-03-15",
            "purchaseTime": "09:05",
            "total": "1.00",
            "items": vec![
                serde_json::json!({"shortDescription": "abc", "price": "92233720368547758.07"});
                501
            ],
        });
        let raw = parse_receipt(body.to_string().as_bytes()).unwrap();

        assert!(matches!(normalize(&raw), Err(NormalizationError::PointsOverflow)));
    }

    #[test]
    fn test_verify_total_accepts_exact_sum() {
        let receipt = normalize(&raw("0.30", &["0.10", "0.20"])).unwrap();
        assert!(verify_total(&receipt).is_ok());
    }

    #[test]
    fn test_verify_total_rejects_mismatch() {
        let receipt = normalize(&raw("10.00", &["5.00", "5.01"])).unwrap();
        match verify_total(&receipt) {
            Err(CoreError::TotalMismatch { expected, actual }) => {
                assert_eq!(expected, Money::from_cents(1000));
                assert_eq!(actual, Money::from_cents(1001));
            }
            other => panic!("expected TotalMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_items_need_zero_total() {
        assert!(verify_total(&normalize(&raw("0.00", &[])).unwrap()).is_ok());
        assert!(verify_total(&normalize(&raw("1.00", &[])).unwrap()).is_err());
    }

    #[test]
    fn test_denormalize_restores_wire_document() {
        let body = br#"{
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "  Gatorade ", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "0.05"}
            ],
            "total": "2.30"
        }"#;
        let raw = parse_receipt(body).unwrap();
        let receipt = normalize(&raw).unwrap();

        assert_eq!(RawReceipt::from(&receipt), raw);
    }
}
