//! Property tests for the price algebra and schedule resolution

use pricing_core::{PricePer, Schedule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn multi_resolution_ratios_hold(cents in 0i64..1_000_000_000) {
        let day = Decimal::new(cents, 2);
        let price = PricePer::from_daily(day);

        // year and month are exact multiplications of the day seed
        prop_assert_eq!(price.year().value(), day * dec!(365.25));
        prop_assert_eq!(price.month().value() * dec!(12), price.year().value());

        // hour involves a division, so allow fixed-point tail error
        let hour_roundtrip = price.hour().value() * dec!(24);
        let error = (hour_roundtrip - day).abs();
        prop_assert!(error < dec!(0.000000000000000001), "error {}", error);
    }

    #[test]
    fn accumulation_is_permutation_invariant(cents in proptest::collection::vec(0i64..10_000_000, 1..20)) {
        let contributions: Vec<Decimal> = cents.iter().map(|c| Decimal::new(*c, 2)).collect();
        let forward = contributions
            .iter()
            .fold(PricePer::zero(), |acc, c| acc.accumulate(*c));
        let backward = contributions
            .iter()
            .rev()
            .fold(PricePer::zero(), |acc, c| acc.accumulate(*c));
        prop_assert_eq!(forward.day().value(), backward.day().value());
        prop_assert_eq!(forward.year().value(), backward.year().value());
    }

    #[test]
    fn metered_duration_is_always_within_a_day(start in 0u32..=24, end in 0u32..=24, count in 0u32..1000) {
        let schedule = Schedule::metered(count, start, end).unwrap();
        prop_assert!(schedule.per_task_hours() <= 24);
        prop_assert_eq!(
            schedule.total_hours(),
            u64::from(count) * u64::from(schedule.per_task_hours())
        );
        if end > start {
            prop_assert_eq!(schedule.per_task_hours(), end - start);
        } else if end < start {
            prop_assert_eq!(schedule.per_task_hours(), (24 - start) + end);
        } else {
            prop_assert_eq!(schedule.per_task_hours(), 0);
        }
    }

    #[test]
    fn display_never_loses_the_sign_or_decimals(cents in -1_000_000_000i64..1_000_000_000) {
        let value = Decimal::new(cents, 2);
        let display = pricing_core::Currency::new(value).display();
        prop_assert!(display.contains('.'));
        let frac = display.rsplit('.').next().unwrap();
        prop_assert_eq!(frac.len(), 2);
        prop_assert_eq!(display.starts_with('-'), cents < 0);
    }
}
