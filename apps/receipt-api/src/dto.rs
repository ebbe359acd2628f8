//! Response bodies.

use receipt_core::{breakdown, PointsBreakdown, RawReceipt, Receipt, ReceiptId};
use serde::Serialize;

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// Body of a successful `GET /receipts/{id}`.
///
/// The wire fields of the stored receipt, plus its identifier, its stored
/// points and how each rule contributed. Stored receipts always scored, so
/// `breakdown` is present in practice.
#[derive(Debug, Serialize)]
pub struct ReceiptDetailResponse {
    pub id: ReceiptId,

    #[serde(flatten)]
    pub receipt: RawReceipt,

    pub points: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PointsBreakdown>,
}

impl From<&Receipt> for ReceiptDetailResponse {
    fn from(receipt: &Receipt) -> Self {
        ReceiptDetailResponse {
            id: receipt.id,
            receipt: RawReceipt::from(receipt),
            points: receipt.points,
            breakdown: breakdown(receipt),
        }
    }
}

#[cfg(test)]
mod tests {
    use receipt_core::{normalize, RawItem};

    use super::*;

    #[test]
    fn test_detail_flattens_wire_fields() {
        let raw = RawReceipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-15".to_string(),
            purchase_time: "14:30".to_string(),
            total: "9.00".to_string(),
            items: vec![
                RawItem { short_description: "Gum".to_string(), price: "1.00".to_string() },
                RawItem { short_description: "Gatorade".to_string(), price: "8.00".to_string() },
            ],
        };
        let receipt = normalize(&raw).unwrap();

        let json = serde_json::to_value(ReceiptDetailResponse::from(&receipt)).unwrap();

        assert_eq!(json["id"], receipt.id.to_string());
        assert_eq!(json["retailer"], "M&M Corner Market");
        assert_eq!(json["purchaseDate"], "2022-03-15");
        assert_eq!(json["purchaseTime"], "14:30");
        assert_eq!(json["total"], "9.00");
        assert_eq!(json["items"][1]["shortDescription"], "Gatorade");
        assert_eq!(json["points"], 111);
        assert_eq!(json["breakdown"]["afternoon"], 10);
    }
}
