//! Presentation traversal
//!
//! A single ordered walk over a priced document drives a pluggable
//! [`RenderStrategy`]: document -> clusters in declaration order -> reserved
//! then metered groups in declaration order -> cluster total -> document
//! total. Both shipped strategies are driven by this one function, so every
//! field present in one format has a counterpart in the other.

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::rollup::{PricedCluster, PricedDocument, PricedTask};

/// Formatting callbacks invoked by [`render`].
///
/// The current cluster is passed alongside each task so strategies can align
/// against cluster-level figures without the task carrying a back-reference
/// to its owner.
pub trait RenderStrategy {
    fn start_document(&mut self, doc: &PricedDocument);
    fn start_cluster(&mut self, index: usize, count: usize);
    fn cluster_header(&mut self, cluster: &PricedCluster);
    fn task(&mut self, cluster: &PricedCluster, task: &PricedTask);
    fn cluster_total(&mut self, cluster: &PricedCluster);
    fn end_cluster(&mut self, is_last: bool);
    fn end_document(&mut self, doc: &PricedDocument);
    /// Collect the rendered output.
    fn finish(&mut self) -> String;
}

/// Walk the document in presentation order and collect the strategy's output.
pub fn render<S: RenderStrategy>(doc: &PricedDocument, mut strategy: S) -> String {
    strategy.start_document(doc);
    let count = doc.clusters.len();
    for (index, cluster) in doc.clusters.iter().enumerate() {
        strategy.start_cluster(index, count);
        strategy.cluster_header(cluster);
        for task in &cluster.tasks {
            strategy.task(cluster, task);
        }
        strategy.cluster_total(cluster);
        strategy.end_cluster(index + 1 == count);
    }
    strategy.end_document(doc);
    strategy.finish()
}
