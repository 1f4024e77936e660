//! # Money Module
//!
//! Provides the `Money` type for room prices read out of the company table.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    110 × (1 − 0.10) = 99.00000000000001   ❌ depends on luck            │
//! │    100 × (1 − 0.12) = 88.0 or 87.99999…   ❌ truncation flips result    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer cents + basis points                             │
//! │    11000 × (10000 − 1000) / 10000 = 9900 cents, always                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices live on disk as plain decimal text ("120", "120.5", "120.50").
//! [`Money::parse`] is the single boundary where that text becomes a number.

use std::fmt;

use crate::error::ValidationError;
use crate::types::DiscountTier;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use hotel_core::money::Money;
    ///
    /// let price = Money::from_cents(12050);
    /// assert_eq!(price.units(), 120);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * 100)
    }

    /// Parses decimal price text.
    ///
    /// Digits past the second decimal place are truncated, not rounded.
    ///
    /// ## Example
    /// ```rust
    /// use hotel_core::money::Money;
    ///
    /// assert_eq!(Money::parse("120").unwrap().cents(), 12000);
    /// assert_eq!(Money::parse("120.5").unwrap().cents(), 12050);
    /// assert_eq!(Money::parse(" 89.999 ").unwrap().cents(), 8999);
    /// assert!(Money::parse("cheap").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' is not a decimal amount", text),
        };

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let mut digits = fraction.chars().take(2);
        let tens = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let ones = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(tens * 10 + ones))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Applies a corporate discount tier.
    ///
    /// The result is truncated toward zero, so a guest is never quoted a
    /// price below the exact discounted value.
    ///
    /// ## Example
    /// ```rust
    /// use hotel_core::money::Money;
    /// use hotel_core::types::DiscountTier;
    ///
    /// let standard = Money::from_units(100);
    /// let quoted = standard.apply_discount(DiscountTier::for_nights(120));
    /// assert_eq!(quoted.cents(), 8800); // 12% off
    /// ```
    pub fn apply_discount(&self, tier: DiscountTier) -> Money {
        let kept_bps = 10_000i128 - tier.bps() as i128;
        let cents = self.0 as i128 * kept_bps / 10_000;
        Money(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals and no currency symbol; the tables
/// do not record a currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
