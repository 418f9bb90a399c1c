//! Fixed-point currency value
//!
//! Wraps a high-precision [`Decimal`]. Arithmetic always operates on the
//! unrounded value; rounding to two decimal places happens only when a value
//! is displayed or serialized, never inside an accumulation chain.

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::Error;

/// An immutable monetary amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Currency(Decimal);

impl Currency {
    /// The zero amount.
    pub const ZERO: Currency = Currency(Decimal::ZERO);

    /// Create a currency value from a high-precision decimal.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// The high-precision value used for all arithmetic.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The value rounded to two decimal places, half away from zero.
    pub fn rounded2(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formatted string with exactly two decimals and thousands separators.
    pub fn display(&self) -> String {
        let rounded = format!("{:.2}", self.rounded2());
        let (sign, unsigned) = match rounded.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rounded.as_str()),
        };
        // rounded2() always yields a fractional part under {:.2}
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
        format!("{sign}{}.{frac_part}", group_digits(int_part))
    }
}

/// Insert comma separators into a run of ascii digits.
pub(crate) fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl Add for Currency {
    type Output = Currency;

    fn add(self, rhs: Currency) -> Currency {
        Currency(self.0 + rhs.0)
    }
}

impl Mul<Decimal> for Currency {
    type Output = Currency;

    fn mul(self, multiplier: Decimal) -> Currency {
        Currency(self.0 * multiplier)
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        Decimal::from_str(text)
            .map(Currency)
            .map_err(|_| Error::CurrencyFormat {
                text: text.to_string(),
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
