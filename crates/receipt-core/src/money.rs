//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  For receipts this breaks two things:                                   │
//! │    • sum(item prices) == total       (exact comparison needed)          │
//! │    • ceil(price × 0.2)               (12.25 × 0.2 = 2.4500000000000002) │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "12.25" → 1225 cents, ceil(1225 / 500) = 3                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let price: Money = "12.25".parse().unwrap();
//! assert_eq!(price.cents(), 1225);
//! assert_eq!(price.to_string(), "12.25");
//! assert_eq!(price.fifth_rounded_up(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in hundredths of a unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays simple; the wire format only admits
///   non-negative amounts
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Display = wire form**: `D.CC`, the same shape the parser accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the hundredths portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount has no cents component.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_whole());
    /// assert!(!Money::from_cents(901).is_whole());
    /// ```
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is an exact multiple of `step_cents`.
    ///
    /// `Money::from_cents(975).is_multiple_of(25)` is a quarter-multiple check.
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        self.0 % step_cents == 0
    }

    /// Computes `ceil(amount × 0.2)` in whole units.
    ///
    /// ## Implementation
    /// `amount × 0.2` in units is `cents / 500`; the ceiling is taken with
    /// Euclidean division so the result is exact for every sign.
    ///
    /// ```text
    /// 1.00  → 100 / 500  = 0.2  → 1
    /// 12.25 → 1225 / 500 = 2.45 → 3
    /// 5.00  → 500 / 500  = 1.0  → 1
    /// 0.00  → 0               → 0
    /// ```
    pub const fn fifth_rounded_up(&self) -> i64 {
        let quotient = self.0.div_euclid(500);
        if self.0.rem_euclid(500) == 0 {
            quotient
        } else {
            quotient + 1
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sums amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let prices = [Money::from_cents(100), Money::from_cents(800)];
    /// assert_eq!(Money::checked_sum(prices), Some(Money::from_cents(900)));
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the wire form `D.CC` (no currency symbol).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses `D.CC`: one or more ASCII digits, a dot, exactly two digits.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoneyError::InvalidFormat(s.to_string());
        let overflow = || ParseMoneyError::Overflow(s.to_string());

        let (whole, fraction) = s.split_once('.').ok_or_else(invalid)?;
        if whole.is_empty()
            || fraction.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let mut cents: i64 = 0;
        for digit in whole.bytes().chain(fraction.bytes()) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(digit - b'0')))
                .ok_or_else(overflow)?;
        }

        Ok(Money(cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
