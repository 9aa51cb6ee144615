//! TRX amount type with SUN precision.

use std::fmt::{self, Display};
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// SUN per TRX (10^-6 TRX).
pub const SUN_PER_TRX: i64 = 1_000_000;

/// A TRX amount with SUN precision (10^-6 TRX).
///
/// The node represents every amount as a signed 64-bit SUN count; this type
/// keeps that representation and serializes as a plain JSON number, matching
/// the wire format.
///
/// # Creating Amounts
///
/// Use the typed constructors for compile-time safety:
///
/// ```
/// use tron_kit::Trx;
///
/// let five_trx = Trx::trx(5);
/// let half_trx = Trx::sun(500_000);
/// ```
///
/// # Parsing from Strings
///
/// String parsing is available for runtime input:
/// - `"5 TRX"` or `"5 trx"` - whole TRX
/// - `"1.5 TRX"` - decimal TRX
/// - `"1000 SUN"` or `"1000 sun"` - raw SUN
///
/// Raw numbers are NOT accepted to prevent unit confusion.
///
/// ```
/// use tron_kit::Trx;
///
/// let amount: Trx = "1.5 TRX".parse().unwrap();
/// assert_eq!(amount.as_sun(), 1_500_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Trx(i64);

impl Trx {
    /// Zero TRX.
    pub const ZERO: Self = Self(0);
    /// One SUN.
    pub const ONE_SUN: Self = Self(1);
    /// One TRX.
    pub const ONE_TRX: Self = Self(SUN_PER_TRX);

    /// Create from whole TRX (short alias for `from_trx`).
    ///
    /// # Example
    ///
    /// ```
    /// use tron_kit::Trx;
    ///
    /// let amount = Trx::trx(5);
    /// assert_eq!(amount.as_sun(), 5_000_000);
    /// ```
    pub const fn trx(trx: i64) -> Self {
        Self(trx * SUN_PER_TRX)
    }

    /// Create from SUN (short alias for `from_sun`).
    pub const fn sun(sun: i64) -> Self {
        Self(sun)
    }

    /// Create from whole TRX.
    pub const fn from_trx(trx: i64) -> Self {
        Self(trx * SUN_PER_TRX)
    }

    /// Create from SUN (10^-6 TRX).
    pub const fn from_sun(sun: i64) -> Self {
        Self(sun)
    }

    /// Parse from a non-negative decimal TRX value (e.g. `"1.5"`).
    ///
    /// At most six fractional digits are significant; further digits are
    /// truncated.
    pub fn from_trx_decimal(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.starts_with('-') {
            return Err(Error::InvalidAmount);
        }

        let (integer_part, decimal_part) = match s.find('.') {
            Some(dot) => (&s[..dot], &s[dot + 1..]),
            None => (s, ""),
        };

        let integer: i64 = if integer_part.is_empty() {
            0
        } else {
            integer_part.parse().map_err(|_| Error::InvalidAmount)?
        };

        let decimal_str = if decimal_part.len() > 6 {
            &decimal_part[..6]
        } else {
            decimal_part
        };
        let decimal: i64 = if decimal_str.is_empty() {
            0
        } else {
            decimal_str.parse().map_err(|_| Error::InvalidAmount)?
        };
        if decimal < 0 {
            // "1.-5" parses the fraction as negative
            return Err(Error::InvalidAmount);
        }
        let decimal_sun = decimal * 10i64.pow((6 - decimal_str.len()) as u32);

        integer
            .checked_mul(SUN_PER_TRX)
            .and_then(|v| v.checked_add(decimal_sun))
            .map(Self)
            .ok_or(Error::InvalidAmount)
    }

    /// Get the raw SUN value.
    pub const fn as_sun(&self) -> i64 {
        self.0
    }

    /// Get whole TRX (truncated).
    pub const fn as_trx(&self) -> i64 {
        self.0 / SUN_PER_TRX
    }

    /// Get the value as TRX (may lose precision).
    pub fn as_trx_f64(&self) -> f64 {
        self.0 as f64 / SUN_PER_TRX as f64
    }

    /// Checked addition.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Check if zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if strictly positive.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Trx {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        // "X TRX" or "X trx"
        if let Some(value) = s.strip_suffix(" TRX").or_else(|| s.strip_suffix(" trx")) {
            return Self::from_trx_decimal(value.trim());
        }

        // "X SUN" or "X sun"
        if let Some(value) = s.strip_suffix(" SUN").or_else(|| s.strip_suffix(" sun")) {
            let v: i64 = value.trim().parse().map_err(|_| Error::InvalidAmount)?;
            if v < 0 {
                return Err(Error::InvalidAmount);
            }
            return Ok(Self(v));
        }

        // Bare numbers are ambiguous
        Err(Error::InvalidAmount)
    }
}

impl TryFrom<&str> for Trx {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl Display for Trx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let trx = abs / SUN_PER_TRX as u64;
        let remainder = abs % SUN_PER_TRX as u64;

        if remainder == 0 {
            write!(f, "{}{} TRX", sign, trx)
        } else {
            let decimal = format!("{:06}", remainder);
            let decimal = decimal.trim_end_matches('0');
            write!(f, "{}{}.{} TRX", sign, trx, decimal)
        }
    }
}

impl Add for Trx {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Trx {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

// Serde: plain number (SUN), matching the node's int64 wire fields
impl Serialize for Trx {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Trx {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let v: i64 = serde::Deserialize::deserialize(d)?;
        Ok(Self(v))
    }
}

/// Trait for types that can be converted into a [`Trx`] amount.
///
/// This allows methods to accept both typed `Trx` values (preferred)
/// and string representations for runtime input.
///
/// # Example
///
/// ```
/// use tron_kit::{IntoTrx, Trx};
///
/// fn example(amount: impl IntoTrx) {
///     let trx = amount.into_trx().unwrap();
/// }
///
/// example(Trx::trx(5));
/// example("5 TRX");
/// ```
pub trait IntoTrx {
    /// Convert into a Trx amount.
    fn into_trx(self) -> Result<Trx>;
}

impl IntoTrx for Trx {
    fn into_trx(self) -> Result<Trx> {
        Ok(self)
    }
}

impl IntoTrx for &str {
    fn into_trx(self) -> Result<Trx> {
        self.parse()
    }
}

impl IntoTrx for String {
    fn into_trx(self) -> Result<Trx> {
        self.parse()
    }
}

impl IntoTrx for &String {
    fn into_trx(self) -> Result<Trx> {
        self.parse()
    }
}
