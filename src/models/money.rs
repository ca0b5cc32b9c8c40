//! Money amounts
//!
//! Amounts are integer cents so that sums are exact and do not depend on the
//! order in which expenses are folded. Rates and percentages derived from
//! money are plain `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use thiserror::Error;

const CENTS_PER_UNIT: i64 = 100;

/// Symbols accepted in front of a parsed amount
const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '€', '£'];

/// An amount of money in cents
///
/// Serializes as the bare cent count. Arithmetic saturates at the `i64`
/// bounds instead of overflowing.
///
/// ```
/// use spendpace::models::Money;
/// let coffee = Money::from_cents(1050);
/// assert_eq!(coffee.units(), 10);
/// assert_eq!(coffee.to_string(), "10.50");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `from_units(12)` is 12.00
    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Currency units as a float, for rate arithmetic
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `100 * self / of`, or 0 when `of` is not a positive amount
    pub fn percent_of(&self, of: Money) -> f64 {
        if of.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 * 100.0 / of.0 as f64
    }

    /// Parse user input such as `"12"`, `"-4.5"`, `"₹1,250.00"` or `".75"`
    ///
    /// One leading currency symbol and thousands separators are ignored; the
    /// minus sign may come before or after the symbol. Fractions beyond two
    /// digits are truncated.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();

        let (mut negative, mut rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        if let Some(after_symbol) = rest.strip_prefix(CURRENCY_SYMBOLS) {
            rest = after_symbol.trim_start();
            if !negative {
                if let Some(after_sign) = rest.strip_prefix('-') {
                    negative = true;
                    rest = after_sign.trim_start();
                }
            }
        }

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
            return Err(MoneyParseError::Malformed(trimmed.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::OutOfRange)?
        };
        let fraction_cents: i64 = fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(2)
            .fold(0, |acc, c| acc * 10 + i64::from(c as u8 - b'0'));

        let cents = whole
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or(MoneyParseError::OutOfRange)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as `₹12.50` / `-₹12.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, Unsigned(*self))
    }
}

/// Magnitude of an amount as `units.cents`
struct Unsigned(Money);

impl fmt::Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0 .0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u64;
        write!(f, "{}.{:02}", cents / per_unit, cents % per_unit)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", Unsigned(*self))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Why a string is not an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("no digits given")]
    Empty,
    #[error("'{0}' is not a number")]
    Malformed(String),
    #[error("amount is too large")]
    OutOfRange,
}
