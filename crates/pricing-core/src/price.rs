//! Multi-resolution price
//!
//! The same cost expressed per hour, day, month and year. All four fields are
//! derived from a single day-resolution seed under fixed ratios:
//! hour = day / 24, year = day * 365.25, month = year / 12. Accumulation is a
//! pure fold over daily contributions; the fold always re-derives the other
//! three resolutions from the new day value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::currency::Currency;

/// Hours in a billing day.
pub const HOURS_PER_DAY: Decimal = dec!(24);
/// Average days in a billing year.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);
/// Months in a billing year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// A price expressed at hour/day/month/year resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePer {
    hour: Currency,
    day: Currency,
    month: Currency,
    year: Currency,
}

impl PricePer {
    /// A zero price at every resolution.
    pub fn zero() -> Self {
        Self::from_daily(Decimal::ZERO)
    }

    /// Build a price from a day-resolution amount.
    pub fn from_daily(day: Decimal) -> Self {
        let year = day * DAYS_PER_YEAR;
        Self {
            hour: Currency::new(day / HOURS_PER_DAY),
            day: Currency::new(day),
            month: Currency::new(year / MONTHS_PER_YEAR),
            year: Currency::new(year),
        }
    }

    /// Fold a daily contribution into this price, returning the new total.
    ///
    /// Addition happens at day resolution on the high-precision value; the
    /// other resolutions are re-derived, so accumulating the same
    /// contributions in any order yields the same total.
    #[must_use]
    pub fn accumulate(&self, daily: Decimal) -> Self {
        Self::from_daily(self.day.value() + daily)
    }

    /// Price per hour.
    pub fn hour(&self) -> Currency {
        self.hour
    }

    /// Price per day.
    pub fn day(&self) -> Currency {
        self.day
    }

    /// Price per month.
    pub fn month(&self) -> Currency {
        self.month
    }

    /// Price per year.
    pub fn year(&self) -> Currency {
        self.year
    }
}

impl Default for PricePer {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolutions_follow_fixed_ratios() {
        let price = PricePer::from_daily(dec!(4.0284));
        assert_eq!(price.day().value(), dec!(4.0284));
        assert_eq!(price.hour().value(), dec!(0.16785));
        assert_eq!(price.year().value(), dec!(1471.3731));
        assert_eq!(price.month().value(), dec!(122.614425));
    }

    #[test]
    fn accumulate_is_a_pure_fold() {
        let base = PricePer::from_daily(dec!(1.5));
        let total = base.accumulate(dec!(2.25));
        // original untouched
        assert_eq!(base.day().value(), dec!(1.5));
        assert_eq!(total.day().value(), dec!(3.75));
        assert_eq!(total.year().value(), dec!(3.75) * DAYS_PER_YEAR);
    }

    #[test]
    fn accumulation_order_does_not_matter() {
        let contributions = [dec!(0.33), dec!(12.07), dec!(5.5), dec!(0.0001)];
        let forward = contributions
            .iter()
            .fold(PricePer::zero(), |acc, c| acc.accumulate(*c));
        let backward = contributions
            .iter()
            .rev()
            .fold(PricePer::zero(), |acc, c| acc.accumulate(*c));
        assert_eq!(forward, backward);
    }

    #[test]
    fn zero_is_zero_everywhere() {
        let zero = PricePer::zero();
        assert_eq!(zero.day().value(), Decimal::ZERO);
        assert_eq!(zero.hour().value(), Decimal::ZERO);
        assert_eq!(zero.month().value(), Decimal::ZERO);
        assert_eq!(zero.year().value(), Decimal::ZERO);
    }
}
