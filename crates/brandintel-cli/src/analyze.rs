//! `analyze` command: build, print and export the intelligence sheet.

use std::path::PathBuf;

use brandintel_engine::{
    BrandIntelligenceRecord, IntelligenceSheet, PriorityTier, RecordFilter, RowPolicy, Segment,
    Selection,
};

use crate::export::{write_export, ExportFormat};
use crate::load::load_sheet;

#[derive(Debug)]
pub(crate) struct AnalyzeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ExportFormat,
    pub strict: bool,
    pub segments: Vec<Segment>,
    pub tiers: Vec<PriorityTier>,
    pub filtered_export: bool,
}

/// Run the pipeline over `input`, print the (filtered) sheet and write the
/// export.
///
/// The export holds the full sheet unless `filtered_export` is set.
///
/// # Errors
///
/// Returns an error if loading, a strict-mode row check, or the export write
/// fails.
pub(crate) fn run_analyze(options: &AnalyzeOptions) -> anyhow::Result<()> {
    let sheet = load_sheet(&options.input, RowPolicy::from_strict(options.strict))?;
    let filter = RecordFilter::new(
        Selection::from_values(options.segments.iter().copied()),
        Selection::from_values(options.tiers.iter().copied()),
    );

    let shown = sheet.filter(&filter);
    print_summary(&sheet, shown.len());
    print_table(&shown);

    let exported: Vec<&BrandIntelligenceRecord> = if options.filtered_export {
        shown
    } else {
        sheet.records().iter().collect()
    };
    write_export(&options.output, options.format, &exported)?;

    tracing::info!(
        path = %options.output.display(),
        rows = exported.len(),
        "wrote brand intelligence sheet"
    );
    println!(
        "wrote {} brands to {}",
        exported.len(),
        options.output.display()
    );

    Ok(())
}

fn print_summary(sheet: &IntelligenceSheet, shown: usize) {
    let report = sheet.report();
    println!(
        "processed {} brands ({} excluded); showing {shown}",
        report.processed, report.excluded
    );
    for (reason, count) in report.reason_counts() {
        println!("  {count} excluded: {reason}");
    }
    for invalid in &report.exclusions {
        println!("  excluded: {invalid}");
    }
    println!();
}

fn print_table(records: &[&BrandIntelligenceRecord]) {
    if records.is_empty() {
        println!("no brands match the selected segments and tiers");
        return;
    }

    println!(
        "{:<5}{:<30}{:>14}{:>8}{:>8}{:>8}  {:<15}{:<23}HOOK",
        "TIER", "BRAND", "REVENUE", "SELF%", "AFF%", "MALL%", "SEGMENT", "PAIN POINT"
    );
    for record in records {
        let shares = record.shares.rounded();
        println!(
            "{:<5}{:<30}{:>14}{:>8}{:>8}{:>8}  {:<15}{:<23}{}",
            record.tier.as_str(),
            truncate(&record.name, 28),
            record.total_revenue.round_dp(2),
            shares.self_op,
            shares.affiliate,
            shares.mall,
            record.segment.as_str(),
            record.pain_point.label(),
            record.copy.hook
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
