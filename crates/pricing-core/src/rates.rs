//! Discount-adjusted hourly rates
//!
//! Every catalog entry has a base hourly cost of
//! `cpu * 0.04048 + gb * 0.004445`. Two rates are derived from it: on-demand
//! (no tier discount) and savings-plan (the reservation discount). Both are
//! then reduced by the enterprise discount. Discounts multiply, they do not
//! add, and rounding to five decimals happens once after both discounts are
//! folded in, half to even at exact midpoints.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::Combination;
use crate::price::{HOURS_PER_DAY, PricePer};

/// Hourly price of one vCPU.
pub const HOURLY_RATE_CPU: Decimal = dec!(0.04048);
/// Hourly price of one GB of memory.
pub const HOURLY_RATE_GB: Decimal = dec!(0.004445);
/// Tier discount for the on-demand billing model.
pub const DISCOUNT_ON_DEMAND: Decimal = Decimal::ZERO;
/// Decimal places kept on a derived hourly rate.
const RATE_SCALE: u32 = 5;

/// Hourly and daily rates for one combination under one discount policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    combination: Combination,
    on_demand_hourly: Decimal,
    savings_plan_hourly: Decimal,
}

impl RateCard {
    /// Derive the on-demand and savings-plan rates for a combination.
    pub fn derive(
        combination: Combination,
        savings_plan_discount: Decimal,
        enterprise_discount: Decimal,
    ) -> Self {
        let on_demand_hourly = hourly_rate(
            combination,
            DISCOUNT_ON_DEMAND,
            enterprise_discount,
        );
        let savings_plan_hourly =
            hourly_rate(combination, savings_plan_discount, enterprise_discount);
        Self {
            combination,
            on_demand_hourly,
            savings_plan_hourly,
        }
    }

    /// The combination these rates were derived for.
    pub fn combination(&self) -> Combination {
        self.combination
    }

    /// Discounted hourly rate for metered tasks.
    pub fn on_demand_hourly(&self) -> Decimal {
        self.on_demand_hourly
    }

    /// Discounted hourly rate for reserved tasks.
    pub fn savings_plan_hourly(&self) -> Decimal {
        self.savings_plan_hourly
    }

    /// On-demand cost of one always-on task at every resolution.
    pub fn on_demand_daily(&self) -> PricePer {
        PricePer::from_daily(self.on_demand_hourly * HOURS_PER_DAY)
    }

    /// Savings-plan cost of one always-on task at every resolution.
    pub fn savings_plan_daily(&self) -> PricePer {
        PricePer::from_daily(self.savings_plan_hourly * HOURS_PER_DAY)
    }
}

/// Derive one discounted hourly rate, rounding once at the end.
fn hourly_rate(
    combination: Combination,
    tier_discount: Decimal,
    enterprise_discount: Decimal,
) -> Decimal {
    let base = combination.cpu() * HOURLY_RATE_CPU + combination.gb() * HOURLY_RATE_GB;
    let discounted = base * (Decimal::ONE - tier_discount) * (Decimal::ONE - enterprise_discount);
    discounted.round_dp(RATE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn worked_example_rates() {
        let catalog = Catalog::standard();
        let entry = catalog.lookup(1.0, 2.0).unwrap();
        let rates = RateCard::derive(entry, dec!(0.20), dec!(0.15));
        assert_eq!(rates.on_demand_hourly(), dec!(0.04196));
        assert_eq!(rates.savings_plan_hourly(), dec!(0.03357));
    }

    #[test]
    fn rounding_happens_after_both_discounts() {
        let catalog = Catalog::standard();
        let entry = catalog.lookup(1.0, 2.0).unwrap();
        // (0.04937 * 0.8) * 0.85 = 0.0335716; rounding after each discount
        // individually would give 0.03358 instead.
        let rates = RateCard::derive(entry, dec!(0.20), dec!(0.15));
        assert_eq!(rates.savings_plan_hourly(), dec!(0.03357));
    }

    #[test]
    fn zero_discounts_yield_the_base_rate() {
        let catalog = Catalog::standard();
        for entry in catalog.entries() {
            let rates = RateCard::derive(*entry, Decimal::ZERO, Decimal::ZERO);
            let base = (entry.cpu() * HOURLY_RATE_CPU + entry.gb() * HOURLY_RATE_GB).round_dp(5);
            assert_eq!(rates.on_demand_hourly(), base);
            assert_eq!(rates.savings_plan_hourly(), base);
        }
    }

    #[test]
    fn exact_midpoint_rates_round_half_to_even() {
        let catalog = Catalog::standard();
        // (0.25, 1): base 0.014565 sits exactly on the 5-decimal midpoint
        let quarter = catalog.lookup(0.25, 1.0).unwrap();
        let rates = RateCard::derive(quarter, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(rates.on_demand_hourly(), dec!(0.01456));
        // (0.5, 1): base 0.024685, another exact midpoint
        let half = catalog.lookup(0.5, 1.0).unwrap();
        let rates = RateCard::derive(half, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(rates.on_demand_hourly(), dec!(0.02468));
    }

    #[test]
    fn daily_rate_is_hourly_times_24() {
        let catalog = Catalog::standard();
        let entry = catalog.lookup(0.5, 1.0).unwrap();
        let rates = RateCard::derive(entry, dec!(0.20), dec!(0.15));
        assert_eq!(
            rates.on_demand_daily().day().value(),
            rates.on_demand_hourly() * dec!(24)
        );
    }
}
