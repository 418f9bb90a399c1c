//! Plain-text rendering strategy
//!
//! One block per cluster: a header line, one line per task group with the
//! annual price right-aligned to the cluster total's width, an `=` underline
//! and the cluster's annual total. Clusters are separated by a blank line and
//! the document closes with a `SUM:` line.

use std::fmt::Write;

use crate::currency::group_digits;
use crate::rollup::{PricedCluster, PricedDocument, PricedTask};
use crate::schedule::HOURS_IN_DAY;

use super::RenderStrategy;

/// Fixed-width aligned text output.
#[derive(Debug, Default)]
pub struct TextRenderer {
    indent: usize,
    out: String,
}

impl TextRenderer {
    /// Create a renderer indenting task lines by `indent` spaces.
    pub fn new(indent: usize) -> Self {
        Self {
            indent,
            out: String::new(),
        }
    }
}

impl RenderStrategy for TextRenderer {
    fn start_document(&mut self, _doc: &PricedDocument) {}

    fn start_cluster(&mut self, _index: usize, _count: usize) {}

    fn cluster_header(&mut self, cluster: &PricedCluster) {
        let _ = writeln!(
            self.out,
            "{}: {} vCPU, {} GB, {} tasks ({} SP, {} OD)",
            cluster.name,
            cluster.combination.cpu(),
            cluster.combination.gb(),
            group_count(cluster.total_count()),
            group_count(cluster.savings_plan_count()),
            group_count(cluster.on_demand_count()),
        );
    }

    fn task(&mut self, cluster: &PricedCluster, task: &PricedTask) {
        let width = cluster.total.year().display().len();
        let _ = writeln!(
            self.out,
            "{}- ${:>width$}   {} {:<12} tasks for {:>2} hours [{:>5} - {:>5})",
            " ".repeat(self.indent),
            task.price.year().display(),
            task.schedule.count(),
            task.kind.label(),
            task.schedule.per_task_hours(),
            clock_label(task.schedule.start_hour()),
            clock_label(task.schedule.end_hour()),
        );
    }

    fn cluster_total(&mut self, cluster: &PricedCluster) {
        let total = cluster.total.year().display();
        let margin = " ".repeat(self.indent + 2);
        let _ = writeln!(self.out, "{margin}{}", "=".repeat(total.len() + 1));
        let _ = writeln!(self.out, "{margin}${total}");
    }

    fn end_cluster(&mut self, is_last: bool) {
        if !is_last {
            self.out.push('\n');
        }
    }

    fn end_document(&mut self, doc: &PricedDocument) {
        let _ = writeln!(self.out, "\nSUM: ${}\n", doc.total.year().display());
    }

    fn finish(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

/// 12-hour wall-clock label for an hour marker; 24 reads as next-day 12 AM.
fn clock_label(hour: u32) -> String {
    match hour % HOURS_IN_DAY {
        0 => "12 AM".to_string(),
        h @ 1..=11 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

fn group_count(count: u32) -> String {
    group_digits(&count.to_string())
}
