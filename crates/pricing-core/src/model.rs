//! Input document records
//!
//! The deserialized shape of a pricing configuration document. Field names
//! follow the camelCase YAML convention of the source documents.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::currency::Currency;
use crate::error::{Error, Result};

/// A pricing configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Deployment region label (informational).
    pub region: String,
    /// Discount policy applied to every cluster in the document.
    pub discounts: Discounts,
    /// Clusters in declaration order.
    #[serde(default)]
    pub clusters: Vec<ClusterSpec>,
}

impl PricingConfig {
    /// Parse a document from YAML content.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })
    }
}

/// Account-level discount policy.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discounts {
    /// Enterprise discount fraction, applied after the tier discount.
    #[serde(deserialize_with = "decimal_fraction")]
    pub enterprise: Decimal,
    /// Savings-plan tier discount fraction.
    #[serde(deserialize_with = "decimal_fraction")]
    pub savings_plan: Decimal,
}

/// One cluster declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub name: String,
    /// Declared compute units; must match a catalog entry.
    pub cpu: f64,
    /// Declared memory in GB; must match a catalog entry.
    pub gb: f64,
    #[serde(default)]
    pub tasks: TaskSpecs,
}

/// Task groups of a cluster, split by billing model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpecs {
    #[serde(default)]
    pub savings_plan: Vec<ReservedSpec>,
    #[serde(default)]
    pub on_demand: Vec<MeteredSpec>,
}

/// A reserved (savings-plan) task group: always-on, only a count.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReservedSpec {
    /// Number of identical task instances.
    pub tasks: u32,
}

/// A metered (on-demand) task group with an active-hours window.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MeteredSpec {
    /// Number of identical task instances.
    pub tasks: u32,
    /// Raw [start, end] hour markers; end before start wraps past midnight.
    pub hours: [u32; 2],
}

/// Accept a decimal fraction as either a YAML number or a quoted literal.
///
/// Quoted literals go through the currency parser so a malformed value
/// surfaces as an invalid-format error naming the offending text.
fn decimal_fraction<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => Currency::from_str(&text)
            .map(|c| c.value())
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
region: us-east-1
discounts:
  enterprise: 0.15
  savingsPlan: 0.20
clusters:
  - name: web
    cpu: 0.5
    gb: 1
    tasks:
      savingsPlan:
        - tasks: 4
      onDemand:
        - tasks: 2
          hours: [8, 16]
"#;

    #[test]
    fn parses_camel_case_yaml() {
        let config = PricingConfig::parse_yaml(SAMPLE).unwrap();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.discounts.enterprise, dec!(0.15));
        assert_eq!(config.discounts.savings_plan, dec!(0.20));
        assert_eq!(config.clusters.len(), 1);

        let cluster = &config.clusters[0];
        assert_eq!(cluster.name, "web");
        assert_eq!(cluster.tasks.savings_plan[0].tasks, 4);
        assert_eq!(cluster.tasks.on_demand[0].hours, [8, 16]);
    }

    #[test]
    fn discounts_accept_quoted_literals() {
        let yaml = r#"
region: eu-west-1
discounts:
  enterprise: "0.1"
  savingsPlan: "0.2"
"#;
        let config = PricingConfig::parse_yaml(yaml).unwrap();
        assert_eq!(config.discounts.enterprise, dec!(0.1));
        assert!(config.clusters.is_empty());
    }

    #[test]
    fn malformed_discount_literal_names_the_text() {
        let yaml = r#"
region: eu-west-1
discounts:
  enterprise: "fifteen"
  savingsPlan: 0.2
"#;
        let err = PricingConfig::parse_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("fifteen"));
    }

    #[test]
    fn missing_tasks_default_to_empty() {
        let yaml = r#"
region: us-east-1
discounts:
  enterprise: 0
  savingsPlan: 0
clusters:
  - name: idle
    cpu: 1
    gb: 2
"#;
        let config = PricingConfig::parse_yaml(yaml).unwrap();
        let cluster = &config.clusters[0];
        assert!(cluster.tasks.savings_plan.is_empty());
        assert!(cluster.tasks.on_demand.is_empty());
    }
}
