//! Batch pricing run
//!
//! Prices each configuration document independently and writes its text and
//! JSON reports. A failing document is reported and skipped; the remaining
//! documents still complete and write their outputs.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use pricing_core::{Catalog, JsonRenderer, TextRenderer, price_document, render};
use tracing::{error, info};

use crate::error::{CliError, Result};
use crate::loader;

/// Outcome of one successfully processed document.
#[derive(Debug)]
pub struct DocumentReport {
    pub name: String,
    pub source: PathBuf,
    pub annual: String,
}

/// Price every config in the batch and write the reports.
pub fn run(catalog: &Catalog, output: &Path, configs: &[PathBuf]) -> Result<()> {
    let text_dir = output.join("text");
    let json_dir = output.join("json");
    fs::create_dir_all(&text_dir)?;
    fs::create_dir_all(&json_dir)?;

    let mut reports = Vec::new();
    let mut failed = 0usize;

    for path in configs {
        match process(catalog, &text_dir, &json_dir, path) {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                error!(config = %path.display(), "skipping document: {e}");
                eprintln!("{}: {}: {}", "error".red().bold(), path.display(), e);
            }
        }
    }

    print_summary(&reports);

    if failed > 0 {
        return Err(CliError::BatchFailed {
            failed,
            total: configs.len(),
        });
    }
    Ok(())
}

fn process(
    catalog: &Catalog,
    text_dir: &Path,
    json_dir: &Path,
    path: &Path,
) -> Result<DocumentReport> {
    let (name, config) = loader::load_config(path)?;
    let doc = price_document(catalog, &config, &name)?;

    let text_path = text_dir.join(format!("{name}.txt"));
    let json_path = json_dir.join(format!("{name}.json"));
    fs::write(&text_path, render(&doc, TextRenderer::new(4)))?;
    fs::write(&json_path, render(&doc, JsonRenderer::new()))?;

    info!(
        name = %name,
        annual = %doc.total.year(),
        text = %text_path.display(),
        json = %json_path.display(),
        "wrote reports"
    );

    Ok(DocumentReport {
        name,
        source: path.to_path_buf(),
        annual: doc.total.year().display(),
    })
}

/// Console summary: names padded to the widest name, annual totals
/// right-aligned to the widest total.
fn print_summary(reports: &[DocumentReport]) {
    let Some(name_width) = reports.iter().map(|r| r.name.len()).max() else {
        return;
    };
    let price_width = reports
        .iter()
        .map(|r| r.annual.len())
        .max()
        .unwrap_or_default();

    println!();
    for report in reports {
        // pad before colorizing so escape codes do not skew the column width
        let name = format!("{:<name_width$}", report.name);
        println!(
            "{} = ${:>price_width$}    {}",
            name.green(),
            report.annual,
            report.source.display()
        );
    }
}
