//! Structured JSON rendering strategy
//!
//! One top-level key per cluster name mapping to `cpu`/`gb`/`totalTasks`, a
//! `tasks` array with hour and price breakdowns, and the cluster `price`; a
//! final top-level `sum` key carries the document total. Prices are rounded
//! to two decimals. Key order follows the traversal order.

use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Number, Value, json};

use crate::price::PricePer;
use crate::rollup::{PricedCluster, PricedDocument, PricedTask};

use super::RenderStrategy;

/// Nested-object JSON output.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    root: Map<String, Value>,
    current_tasks: Vec<Value>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderStrategy for JsonRenderer {
    fn start_document(&mut self, _doc: &PricedDocument) {}

    fn start_cluster(&mut self, _index: usize, _count: usize) {
        self.current_tasks.clear();
    }

    fn cluster_header(&mut self, _cluster: &PricedCluster) {}

    fn task(&mut self, _cluster: &PricedCluster, task: &PricedTask) {
        let schedule = &task.schedule;
        self.current_tasks.push(json!({
            "type": task.kind.label(),
            "tasks": schedule.count(),
            "hours": {
                "start": schedule.start_hour(),
                "end": schedule.end_hour(),
                "perTask": schedule.per_task_hours(),
                "total": schedule.total_hours(),
            },
            "price": price_object(&task.price),
        }));
    }

    fn cluster_total(&mut self, cluster: &PricedCluster) {
        let tasks = std::mem::take(&mut self.current_tasks);
        self.root.insert(
            cluster.name.clone(),
            json!({
                "cpu": decimal_number(cluster.combination.cpu()),
                "gb": decimal_number(cluster.combination.gb()),
                "totalTasks": cluster.total_count(),
                "tasks": tasks,
                "price": price_object(&cluster.total),
            }),
        );
    }

    fn end_cluster(&mut self, _is_last: bool) {}

    fn end_document(&mut self, doc: &PricedDocument) {
        self.root
            .insert("sum".to_string(), price_object(&doc.total));
    }

    fn finish(&mut self) -> String {
        let root = Value::Object(std::mem::take(&mut self.root));
        serde_json::to_string_pretty(&root).expect("JSON value serialization cannot fail")
    }
}

fn price_object(price: &PricePer) -> Value {
    json!({
        "year": decimal_number(price.year().rounded2()),
        "month": decimal_number(price.month().rounded2()),
        "day": decimal_number(price.day().rounded2()),
        "hour": decimal_number(price.hour().rounded2()),
    })
}

fn decimal_number(value: rust_decimal::Decimal) -> Value {
    value
        .to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
