//! Price computation and hierarchical rollup
//!
//! Resolves every task group's schedule, prices it against the cluster's rate
//! card and folds the daily amounts upward: task -> cluster -> document. The
//! result is a new owned tree; the input document is never mutated.
//!
//! Accumulation always happens at day resolution. The hour, month and year
//! figures are re-derived from the folded day value so the fixed ratios
//! between resolutions hold at every level.

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{Catalog, Combination};
use crate::error::Result;
use crate::model::{ClusterSpec, PricingConfig};
use crate::price::PricePer;
use crate::rates::RateCard;
use crate::schedule::Schedule;

/// Billing model of a priced task group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Reserved capacity billed at the savings-plan rate.
    SavingsPlan,
    /// Metered capacity billed at the on-demand rate.
    OnDemand,
}

impl TaskKind {
    /// Human-readable label used by both output formats.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::SavingsPlan => "Savings Plan",
            TaskKind::OnDemand => "On Demand",
        }
    }
}

/// A task group with its resolved schedule and computed price.
#[derive(Debug, Clone, Copy)]
pub struct PricedTask {
    pub kind: TaskKind,
    pub schedule: Schedule,
    pub price: PricePer,
}

/// A cluster with per-model and combined totals.
#[derive(Debug, Clone)]
pub struct PricedCluster {
    pub name: String,
    pub combination: Combination,
    pub rates: RateCard,
    /// Reserved groups first, then metered groups, both in declaration order.
    pub tasks: Vec<PricedTask>,
    pub savings_plan_total: PricePer,
    pub on_demand_total: PricePer,
    pub total: PricePer,
}

impl PricedCluster {
    /// Instances across reserved groups.
    pub fn savings_plan_count(&self) -> u32 {
        self.kind_count(TaskKind::SavingsPlan)
    }

    /// Instances across metered groups.
    pub fn on_demand_count(&self) -> u32 {
        self.kind_count(TaskKind::OnDemand)
    }

    /// Instances across all groups.
    pub fn total_count(&self) -> u32 {
        self.savings_plan_count() + self.on_demand_count()
    }

    fn kind_count(&self, kind: TaskKind) -> u32 {
        self.tasks
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.schedule.count())
            .sum()
    }
}

/// A fully priced document: the root of the ownership tree.
#[derive(Debug, Clone)]
pub struct PricedDocument {
    pub name: String,
    pub region: String,
    pub clusters: Vec<PricedCluster>,
    pub total: PricePer,
}

/// Price one schedule: daily seed = hourly rate x total active hours.
pub fn price_schedule(schedule: &Schedule, hourly_rate: Decimal) -> PricePer {
    PricePer::from_daily(hourly_rate * Decimal::from(schedule.total_hours()))
}

/// Resolve and price a whole document against the catalog.
pub fn price_document(
    catalog: &Catalog,
    config: &PricingConfig,
    name: &str,
) -> Result<PricedDocument> {
    let mut clusters = Vec::with_capacity(config.clusters.len());
    let mut total = PricePer::zero();

    for spec in &config.clusters {
        let cluster = price_cluster(catalog, config, spec)?;
        total = total.accumulate(cluster.total.day().value());
        clusters.push(cluster);
    }

    debug!(
        document = name,
        clusters = clusters.len(),
        annual = %total.year(),
        "priced document"
    );

    Ok(PricedDocument {
        name: name.to_string(),
        region: config.region.clone(),
        clusters,
        total,
    })
}

fn price_cluster(
    catalog: &Catalog,
    config: &PricingConfig,
    spec: &ClusterSpec,
) -> Result<PricedCluster> {
    let combination = catalog.lookup(spec.cpu, spec.gb)?;
    let rates = RateCard::derive(
        combination,
        config.discounts.savings_plan,
        config.discounts.enterprise,
    );

    let mut tasks = Vec::new();
    let mut savings_plan_total = PricePer::zero();
    let mut on_demand_total = PricePer::zero();

    for group in &spec.tasks.savings_plan {
        let schedule = Schedule::always_on(group.tasks);
        let price = price_schedule(&schedule, rates.savings_plan_hourly());
        savings_plan_total = savings_plan_total.accumulate(price.day().value());
        tasks.push(PricedTask {
            kind: TaskKind::SavingsPlan,
            schedule,
            price,
        });
    }

    for group in &spec.tasks.on_demand {
        let schedule = Schedule::metered(group.tasks, group.hours[0], group.hours[1])?;
        let price = price_schedule(&schedule, rates.on_demand_hourly());
        on_demand_total = on_demand_total.accumulate(price.day().value());
        tasks.push(PricedTask {
            kind: TaskKind::OnDemand,
            schedule,
            price,
        });
    }

    let total =
        PricePer::from_daily(savings_plan_total.day().value() + on_demand_total.day().value());

    Ok(PricedCluster {
        name: spec.name.clone(),
        combination,
        rates,
        tasks,
        savings_plan_total,
        on_demand_total,
        total,
    })
}
