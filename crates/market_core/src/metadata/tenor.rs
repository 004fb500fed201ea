//! Tenor periods used to identify curve nodes.

use crate::error::MarketDataError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of a tenor period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Weeks
    Weeks,
    /// Months
    Months,
    /// Years
    Years,
}

impl TenorUnit {
    /// Single-letter code used in tenor strings.
    #[inline]
    pub fn code(&self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }
}

/// A period such as `3M` or `10Y`.
///
/// # Example
///
/// ```
/// use market_core::{Tenor, TenorUnit};
///
/// let tenor: Tenor = "18m".parse().unwrap();
/// assert_eq!(tenor, Tenor::new(18, TenorUnit::Months));
/// assert_eq!(tenor.to_string(), "18M");
/// assert!((tenor.year_fraction() - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tenor {
    amount: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Construct a tenor from an amount and unit.
    #[inline]
    pub const fn new(amount: u32, unit: TenorUnit) -> Self {
        Self { amount, unit }
    }

    /// Tenor of `n` months.
    #[inline]
    pub const fn months(n: u32) -> Self {
        Self::new(n, TenorUnit::Months)
    }

    /// Tenor of `n` years.
    #[inline]
    pub const fn years(n: u32) -> Self {
        Self::new(n, TenorUnit::Years)
    }

    /// Number of units.
    #[inline]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// The period unit.
    #[inline]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Approximate length in years (Act/365 for days and weeks).
    pub fn year_fraction(&self) -> f64 {
        let n = f64::from(self.amount);
        match self.unit {
            TenorUnit::Days => n / 365.0,
            TenorUnit::Weeks => n * 7.0 / 365.0,
            TenorUnit::Months => n / 12.0,
            TenorUnit::Years => n,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.code())
    }
}

impl FromStr for Tenor {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || MarketDataError::InvalidTenor(s.to_string());

        let unit_char = trimmed.chars().last().ok_or_else(invalid)?;
        let unit = match unit_char.to_ascii_uppercase() {
            'D' => TenorUnit::Days,
            'W' => TenorUnit::Weeks,
            'M' => TenorUnit::Months,
            'Y' => TenorUnit::Years,
            _ => return Err(invalid()),
        };

        let digits = &trimmed[..trimmed.len() - unit_char.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount = digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(amount, unit))
    }
}
