//! # Validation Module
//!
//! Field format rules for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Pass, Two Checks                               │
//! │                                                                         │
//! │  Shape check (regex)         Semantic check                             │
//! │  ─────────────────────       ──────────────────────────────             │
//! │  retailer  ^[\w\s\-&]+$      -                                          │
//! │  date      ^\d{4}-\d{2}-\d{2}$  real calendar date (chrono)             │
//! │  time      ^[0-2]\d:[0-5]\d$    real time of day (chrono)               │
//! │  amount    ^\d+\.\d{2}$      fits in fixed-point Money                  │
//! │                                                                         │
//! │  Both run here, so "2022-13-40" or "29:59" is a field error and never  │
//! │  reaches the normalizer.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Character classes are ASCII-only: `\w` is `[0-9A-Za-z_]` and `\s` is
//! ASCII whitespace.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{is_valid_amount, is_valid_date, is_valid_text};
//!
//! assert!(is_valid_text("M&M Corner Market"));
//! assert!(is_valid_date("2022-03-15"));
//! assert!(!is_valid_date("2022-02-30"));
//! assert!(is_valid_amount("9.00"));
//! ```

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::money::Money;

/// chrono format for `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format for `purchaseTime`.
pub const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Patterns
// =============================================================================

static TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:[\w\t\n\f\r \-&])+$").expect("text pattern compiles"));

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-2][0-9]:[0-5][0-9]$").expect("time pattern compiles"));

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern compiles"));

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a retailer name or item description.
///
/// ## Rules
/// - Must not be empty
/// - Only ASCII word characters, space, `\t`, `\n`, `\f`, `\r`, hyphen and
///   ampersand (no vertical tab)
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_valid_text;
///
/// assert!(is_valid_text("Mountain Dew 12PK"));
/// assert!(is_valid_text("   Klarbrunn 12-PK 12 FL OZ  "));
/// assert!(!is_valid_text(""));
/// assert!(!is_valid_text("Café"));
/// assert!(!is_valid_text("Pepsi (12oz)"));
/// ```
pub fn is_valid_text(value: &str) -> bool {
    TEXT_PATTERN.is_match(value)
}

/// Validates a purchase date: `YYYY-MM-DD` and a real calendar date.
pub fn is_valid_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Validates a purchase time: `HH:MM` and a real time of day.
pub fn is_valid_time(value: &str) -> bool {
    TIME_PATTERN.is_match(value) && NaiveTime::parse_from_str(value, TIME_FORMAT).is_ok()
}

/// Validates a price or total: `D.CC` that fits in [`Money`].
pub fn is_valid_amount(value: &str) -> bool {
    AMOUNT_PATTERN.is_match(value) && value.parse::<Money>().is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
