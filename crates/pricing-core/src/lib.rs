//! Cost-modeling engine for ECS Fargate pricing
//!
//! Computes the recurring cost of containerized workloads under two billing
//! models (discounted savings-plan capacity and metered on-demand capacity)
//! and rolls the costs up through task -> cluster -> document at four time
//! resolutions (hour, day, month, year).
//!
//! # Architecture
//!
//! ```text
//!             render (text | json)
//!                     |
//!                  rollup
//!                 /      \
//!         schedule        rates
//!                        /
//!                 catalog
//!                     |
//!           price / currency
//! ```
//!
//! The [`Catalog`] is the only process-wide state. It is built once, is
//! read-only afterwards, and is passed by reference into pricing, so
//! independent documents can be processed concurrently without locking.

pub mod catalog;
pub mod currency;
pub mod error;
pub mod model;
pub mod price;
pub mod rates;
pub mod render;
pub mod rollup;
pub mod schedule;

pub use catalog::{Catalog, Combination};
pub use currency::Currency;
pub use error::{Error, Result};
pub use model::{ClusterSpec, Discounts, MeteredSpec, PricingConfig, ReservedSpec, TaskSpecs};
pub use price::PricePer;
pub use rates::RateCard;
pub use render::{JsonRenderer, RenderStrategy, TextRenderer, render};
pub use rollup::{PricedCluster, PricedDocument, PricedTask, TaskKind, price_document,
    price_schedule};
pub use schedule::Schedule;
