//! Compute/memory combination catalog
//!
//! The catalog enumerates every valid (vCPU, memory GB) pairing. It is built
//! once at process start and passed by reference wherever a lookup is needed;
//! lookups never mutate it, so a single catalog can serve any number of
//! documents concurrently.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::error::{Error, Result};

/// Tolerance for matching a declared dimension against a catalog entry.
const DIMENSION_EPSILON: f64 = 1e-6;

/// A valid pairing of compute units and memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    cpu: Decimal,
    gb: Decimal,
}

impl Combination {
    fn new(cpu: Decimal, gb: Decimal) -> Self {
        Self { cpu, gb }
    }

    /// Compute units (vCPU).
    pub fn cpu(&self) -> Decimal {
        self.cpu
    }

    /// Memory in GB.
    pub fn gb(&self) -> Decimal {
        self.gb
    }

    /// Whether this entry matches the given dimensions within tolerance.
    pub fn matches(&self, cpu: f64, gb: f64) -> bool {
        dimension_eq(self.cpu, cpu) && dimension_eq(self.gb, gb)
    }
}

fn dimension_eq(entry: Decimal, declared: f64) -> bool {
    entry
        .to_f64()
        .is_some_and(|value| (value - declared).abs() < DIMENSION_EPSILON)
}

/// The fixed, read-only set of valid combinations.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Combination>,
}

impl Catalog {
    /// Build the standard Fargate combination table.
    ///
    /// Three quarter-vCPU rows, then one memory progression per vCPU tier
    /// bounded by a fixed (min, max, step) triple.
    pub fn standard() -> Self {
        let mut entries = vec![
            Combination::new(dec!(0.25), dec!(0.5)),
            Combination::new(dec!(0.25), dec!(1)),
            Combination::new(dec!(0.25), dec!(2)),
        ];

        let tiers = [
            (dec!(0.5), dec!(1), dec!(4), dec!(1)),
            (dec!(1), dec!(2), dec!(8), dec!(1)),
            (dec!(2), dec!(4), dec!(16), dec!(1)),
            (dec!(4), dec!(8), dec!(30), dec!(1)),
            (dec!(8), dec!(16), dec!(60), dec!(4)),
            (dec!(16), dec!(32), dec!(120), dec!(8)),
        ];
        for (cpu, first, last, step) in tiers {
            for gb in seq(first, last, step) {
                entries.push(Combination::new(cpu, gb));
            }
        }

        debug!(entries = entries.len(), "built combination catalog");
        Self { entries }
    }

    /// Look up the entry matching the declared dimensions.
    pub fn lookup(&self, cpu: f64, gb: f64) -> Result<Combination> {
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.matches(cpu, gb))
            .ok_or(Error::UnknownCombination { cpu, gb })
    }

    /// All entries in tier order.
    pub fn entries(&self) -> &[Combination] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generate the inclusive sequence `first, first + step, ..., last`.
///
/// A zero step is a programming invariant violation, not a runtime input
/// error, so it fails fast.
fn seq(first: Decimal, last: Decimal, step: Decimal) -> Vec<Decimal> {
    assert!(!step.is_zero(), "step cannot be zero");

    let mut values = Vec::new();
    let mut value = first;
    if step.is_sign_positive() {
        while value <= last {
            values.push(value);
            value += step;
        }
    } else {
        while value >= last {
            values.push(value);
            value += step;
        }
    }
    values
}
