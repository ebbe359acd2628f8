//! # Raw Receipt Parser
//!
//! Decodes submitted JSON bytes into a field-validated [`RawReceipt`].
//!
//! ## Decision Flow
//! ```text
//! bytes
//!   │
//!   ├── empty / whitespace only ────────────► ParseError::EmptyBody
//!   │
//!   ├── not well-formed JSON ───────────────► ParseError::Syntax
//!   │
//!   ├── wrong JSON type for a field ────────► ParseError::InvalidValue
//!   │
//!   ├── top-level fields absent ────────────► ValidationError::MissingFields
//!   │
//!   ├── top-level fields malformed ─────────► ValidationError::InvalidFields
//!   │
//!   ├── item i: fields absent ──────────────► ValidationError::MissingItemFields
//!   ├── item i: fields malformed ───────────► ValidationError::InvalidItemFields
//!   │
//!   └── OK ─────────────────────────────────► RawReceipt
//! ```
//!
//! Missing-field detection always runs before format validation, and every
//! error lists all the offending fields it found at that stage.

use serde::Deserialize;
use serde_json::error::Category;

use crate::error::{ParseError, ValidationError};
use crate::types::{RawItem, RawReceipt};
use crate::validation::{is_valid_amount, is_valid_date, is_valid_text, is_valid_time};

// =============================================================================
// Wire Envelope
// =============================================================================

/// Receipt exactly as decoded; every field may be absent (or `null`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReceipt {
    items: Option<Vec<WireItem>>,
    retailer: Option<String>,
    purchase_date: Option<String>,
    purchase_time: Option<String>,
    total: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    short_description: Option<String>,
    price: Option<String>,
}

// =============================================================================
// Entry Point
// =============================================================================

/// Parses and validates a submitted receipt document.
///
/// ## Example
/// ```rust
/// use receipt_core::{parse_receipt, ParseError};
///
/// let err = parse_receipt(br#"{"retailer": "Target", "items": []}"#).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Receipt error: missing fields: purchaseDate, purchaseTime, total"
/// );
///
/// assert!(matches!(parse_receipt(b""), Err(ParseError::EmptyBody)));
/// ```
pub fn parse_receipt(body: &[u8]) -> Result<RawReceipt, ParseError> {
    if body
        .iter()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
    {
        return Err(ParseError::EmptyBody);
    }

    let wire: WireReceipt = serde_json::from_slice(body).map_err(envelope_error)?;
    Ok(wire.into_raw()?)
}

/// Sorts serde_json failures into the envelope error classes.
fn envelope_error(err: serde_json::Error) -> ParseError {
    match err.classify() {
        Category::Data => ParseError::InvalidValue {
            message: err.to_string(),
        },
        _ => ParseError::Syntax {
            line: err.line(),
            column: err.column(),
        },
    }
}

// =============================================================================
// Field Validation
// =============================================================================

impl WireReceipt {
    fn into_raw(self) -> Result<RawReceipt, ValidationError> {
        let mut missing = Vec::with_capacity(5);
        if self.items.is_none() {
            missing.push("items");
        }
        if self.retailer.is_none() {
            missing.push("retailer");
        }
        if self.purchase_date.is_none() {
            missing.push("purchaseDate");
        }
        if self.purchase_time.is_none() {
            missing.push("purchaseTime");
        }
        if self.total.is_none() {
            missing.push("total");
        }

        let (Some(items), Some(retailer), Some(purchase_date), Some(purchase_time), Some(total)) = (
            self.items,
            self.retailer,
            self.purchase_date,
            self.purchase_time,
            self.total,
        ) else {
            return Err(ValidationError::MissingFields { fields: missing });
        };

        let mut invalid = Vec::with_capacity(4);
        if !is_valid_text(&retailer) {
            invalid.push("retailer");
        }
        if !is_valid_date(&purchase_date) {
            invalid.push("purchaseDate");
        }
        if !is_valid_time(&purchase_time) {
            invalid.push("purchaseTime");
        }
        if !is_valid_amount(&total) {
            invalid.push("total");
        }
        if !invalid.is_empty() {
            return Err(ValidationError::InvalidFields { fields: invalid });
        }

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_raw(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RawReceipt {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        })
    }
}

impl WireItem {
    fn into_raw(self, index: usize) -> Result<RawItem, ValidationError> {
        let (short_description, price) = match (self.short_description, self.price) {
            (Some(short_description), Some(price)) => (short_description, price),
            (short_description, price) => {
                let mut fields = Vec::with_capacity(2);
                if short_description.is_none() {
                    fields.push("shortDescription");
                }
                if price.is_none() {
                    fields.push("price");
                }
                return Err(ValidationError::MissingItemFields { index, fields });
            }
        };

        let mut invalid = Vec::with_capacity(2);
        if !is_valid_text(&short_description) {
            invalid.push("shortDescription");
        }
        if !is_valid_amount(&price) {
            invalid.push("price");
        }
        if !invalid.is_empty() {
            return Err(ValidationError::InvalidItemFields {
                index,
                fields: invalid,
            });
        }

        Ok(RawItem {
            short_description,
            price,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    }"#;

    fn validation_error(body: &str) -> ValidationError {
        match parse_receipt(body.as_bytes()) {
            Err(ParseError::Validation(err)) => err,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_valid_receipt() {
        let raw = parse_receipt(TARGET.as_bytes()).unwrap();
        assert_eq!(raw.retailer, "Target");
        assert_eq!(raw.items.len(), 5);
        assert_eq!(raw.items[4].short_description, "   Klarbrunn 12-PK 12 FL OZ  ");
        assert_eq!(raw.total, "35.35");
    }

    #[test]
    fn test_empty_body() {
        assert!(matches!(parse_receipt(b""), Err(ParseError::EmptyBody)));
        assert!(matches!(parse_receipt(b" \n\t"), Err(ParseError::EmptyBody)));
    }

    #[test]
    fn test_bad_syntax() {
        let err = parse_receipt(br#"{"retailer": "Target",}"#).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }), "{err:?}");

        let truncated = parse_receipt(br#"{"retailer": "Tar"#).unwrap_err();
        assert!(matches!(truncated, ParseError::Syntax { .. }), "{truncated:?}");
    }

    #[test]
    fn test_wrong_json_type() {
        let err = parse_receipt(br#"{"total": 9.00}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }), "{err:?}");

        let err = parse_receipt(b"[]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }), "{err:?}");
    }

    #[test]
    fn test_reports_every_missing_field() {
        let body = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "items": []
        }"#;
        assert_eq!(
            validation_error(body),
            ValidationError::MissingFields {
                fields: vec!["purchaseTime", "total"]
            }
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let body = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "0.00",
            "items": []
        }"#;
        assert_eq!(validation_error(body).fields(), &["retailer"]);
    }

    #[test]
    fn test_missing_checked_before_format() {
        let body = r#"{"retailer": "Bad $hop", "total": "nine"}"#;
        assert_eq!(
            validation_error(body),
            ValidationError::MissingFields {
                fields: vec!["items", "purchaseDate", "purchaseTime"]
            }
        );
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let body = r#"{
            "retailer": "Trader Joe's",
            "purchaseDate": "2022-13-40",
            "purchaseTime": "29:59",
            "total": "9",
            "items": []
        }"#;
        assert_eq!(
            validation_error(body),
            ValidationError::InvalidFields {
                fields: vec!["retailer", "purchaseDate", "purchaseTime", "total"]
            }
        );
    }

    #[test]
    fn test_item_missing_fields() {
        let body = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "1.00",
            "items": [{"shortDescription": "Gum", "price": "1.00"}, {}]
        }"#;
        assert_eq!(
            validation_error(body),
            ValidationError::MissingItemFields {
                index: 1,
                fields: vec!["shortDescription", "price"]
            }
        );
    }

    #[test]
    fn test_item_invalid_fields() {
        let body = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "1.00",
            "items": [{"shortDescription": "", "price": "1.0"}]
        }"#;
        assert_eq!(
            validation_error(body),
            ValidationError::InvalidItemFields {
                index: 0,
                fields: vec!["shortDescription", "price"]
            }
        );
    }

    #[test]
    fn test_price_too_large_is_invalid() {
        let body = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "100000000000000000000000.00",
            "items": [{"shortDescription": "Yacht", "price": "100000000000000000000000.00"}]
        }"#;
        assert_eq!(validation_error(body).fields(), &["total"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "0.00",
            "items": [],
            "cashier": "Sam"
        }"#;
        assert!(parse_receipt(body.as_bytes()).is_ok());
    }
}
