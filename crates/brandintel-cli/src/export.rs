//! Export encoders for the intelligence sheet.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use brandintel_engine::{BrandIntelligenceRecord, ExportRow};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Csv,
    Json,
}

/// Write `records` to `path` in the requested format.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub(crate) fn write_export(
    path: &Path,
    format: ExportFormat,
    records: &[&BrandIntelligenceRecord],
) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    let written = match format {
        ExportFormat::Csv => write_csv(writer, records),
        ExportFormat::Json => write_json(writer, records),
    };
    written.with_context(|| format!("failed to write export {}", path.display()))
}

/// Encode records as CSV. The header row is written even when there are no
/// records.
pub(crate) fn write_csv<W: Write>(
    writer: W,
    records: &[&BrandIntelligenceRecord],
) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(ExportRow::COLUMNS)?;
    for record in records {
        csv_writer.serialize(record.to_export_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub(crate) fn write_json<W: Write>(
    mut writer: W,
    records: &[&BrandIntelligenceRecord],
) -> anyhow::Result<()> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(|r| r.to_export_row()).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
