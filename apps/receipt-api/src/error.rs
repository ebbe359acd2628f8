//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Receipt API                        │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  ReceiptService::submit → Result<ReceiptId, ApiError>            │  │
//! │  │         │                                                        │  │
//! │  │  ParseError ─────────────── EMPTY_BODY / MALFORMED_BODY /  ──┐   │  │
//! │  │         │                   VALIDATION_ERROR (400)           │   │  │
//! │  │  CoreError ──────────────── TOTAL_MISMATCH /                 │   │  │
//! │  │         │                   NORMALIZATION_ERROR (400)        ├──►│  │
//! │  │  StoreError ─────────────── NOT_FOUND (404) / CONFLICT (409) │   │  │
//! │  │         │                   INTERNAL (500, detail logged)  ──┘   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── { "code": "TOTAL_MISMATCH", "message": "Receipt error: ..." }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{CoreError, NormalizationError, ParseError};
use receipt_store::StoreError;
use serde::Serialize;

/// Message sent for every internal error; the detail only goes to the log.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No receipt found for that ID."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body had no content (400)
    EmptyBody,

    /// Request body was not well-formed JSON (400)
    MalformedBody,

    /// Receipt fields missing or badly formatted (400)
    ValidationError,

    /// Item prices do not add up to the total (400)
    TotalMismatch,

    /// A validated value could not be converted (400)
    NormalizationError,

    /// Request body exceeds the configured ceiling (413)
    PayloadTooLarge,

    /// Path identifier is not a UUID (400)
    InvalidId,

    /// No receipt stored under the identifier (404)
    NotFound,

    /// Identifier already taken (409)
    Conflict,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::EmptyBody
            | ErrorCode::MalformedBody
            | ErrorCode::ValidationError
            | ErrorCode::TotalMismatch
            | ErrorCode::NormalizationError
            | ErrorCode::InvalidId => StatusCode::BAD_REQUEST,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_id() -> Self {
        ApiError::new(ErrorCode::InvalidId, "Invalid ID.")
    }

    /// Creates a not found error.
    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, "No receipt found for that ID.")
    }

    /// Creates a payload too large error.
    pub fn payload_too_large() -> Self {
        ApiError::new(ErrorCode::PayloadTooLarge, "Request body too large")
    }

    /// Creates an internal error, logging `detail` and hiding it from the client.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", detail);
        ApiError::new(ErrorCode::Internal, INTERNAL_MESSAGE)
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts parse errors to API errors.
impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        let code = match &err {
            ParseError::EmptyBody => ErrorCode::EmptyBody,
            ParseError::Syntax { .. } => ErrorCode::MalformedBody,
            ParseError::InvalidValue { .. } | ParseError::Validation(_) => {
                ErrorCode::ValidationError
            }
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts normalization errors to API errors.
impl From<NormalizationError> for ApiError {
    fn from(err: NormalizationError) -> Self {
        ApiError::new(ErrorCode::NormalizationError, err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TotalMismatch { .. } | CoreError::SumOverflow => {
                ApiError::new(ErrorCode::TotalMismatch, err.to_string())
            }
            CoreError::Normalization(e) => e.into(),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::not_found(),
            StoreError::AlreadyExists(_) => ApiError::new(ErrorCode::Conflict, err.to_string()),
            StoreError::Poisoned => ApiError::internal(err),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::warn!(code = ?self.code, status = status.as_u16(), "{}", self.message);
        }
        (status, Json(self)).into_response()
    }
}
