//! CSV export of both lists

use crate::model::{Category, Ledger};
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Header row of the export
pub const CSV_HEADER: [&str; 4] = ["Tipo", "Nome", "Valor", "Data"];

/// Serialize both lists into CSV text
///
/// Expenses come first, then income. Fields are written as-is with no quoting,
/// so a comma inside a name shifts that row's columns. Rows are separated by
/// `\n` with no trailing newline.
pub fn build_csv(ledger: &Ledger) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for category in Category::all() {
        for entry in ledger.list(category).entries() {
            let amount = entry.formatted_amount();
            writer.write_record([
                category.export_tag(),
                entry.name.as_str(),
                amount.as_str(),
                entry.date.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    let mut csv = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;
    if csv.ends_with('\n') {
        csv.pop();
    }
    Ok(csv)
}

/// Write the export to `<dir>/<file_stem>.csv` and return its path
pub fn export_csv(ledger: &Ledger, dir: &Path, file_stem: &str) -> Result<PathBuf> {
    let csv = build_csv(ledger)?;

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    }

    let path = dir.join(format!("{}.csv", file_stem));
    fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        expenses = ledger.expenses.len(),
        income = ledger.income.len(),
        "exported csv"
    );
    Ok(path)
}
