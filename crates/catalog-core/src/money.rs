//! # Money Module
//!
//! Integer money in minor currency units.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  0.1 + 0.2 = 0.30000000000000004  ❌                                │
//! │                                                                     │
//! │  OUR SOLUTION: minor units (cents/lipe) as i64                      │
//! │  39900 units = 399.00 - exact at every step                         │
//! │                                                                     │
//! │  The database, the repositories, and the API all carry minor        │
//! │  units; only display code renders the decimal form.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit.
///
/// Signed so that refund/credit math stays representable; product prices
/// themselves are validated elsewhere to be non-zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::Money;
    ///
    /// let price = Money::from_minor_units(39900); // 399.00
    /// assert_eq!(price.minor_units(), 39900);
    /// ```
    #[inline]
    pub const fn from_minor_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit remainder (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a whole-percent discount and returns the reduced amount.
    ///
    /// Rounds the discount amount half-up in integer math. A percentage
    /// outside 0-100 is clamped.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::Money;
    ///
    /// let price = Money::from_minor_units(10000);
    /// assert_eq!(price.apply_discount_percent(25).minor_units(), 7500);
    /// ```
    pub fn apply_discount_percent(&self, percent: i64) -> Money {
        let percent = percent.clamp(0, 100);
        // i128 keeps the intermediate product from overflowing
        let off = (self.0 as i128 * percent as i128 + 50) / 100;
        Money(self.0 - off as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly decimal rendering. UI display formatting (currency
/// symbol, locale separators) belongs to the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
