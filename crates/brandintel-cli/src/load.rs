//! Shop export loading (CSV or Excel workbook) into an intelligence sheet.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use brandintel_engine::{run_batch, ColumnMap, IntelligenceSheet, RowPolicy};
use calamine::{open_workbook_auto, Data, Reader};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Open a shop export on disk and run it through the engine.
///
/// Workbooks (`.xlsx`, `.xls`, ...) are read from their first sheet; any
/// other file is read as CSV.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a required column is missing,
/// or (in strict mode) any row is invalid.
pub(crate) fn load_sheet(path: &Path, policy: RowPolicy) -> anyhow::Result<IntelligenceSheet> {
    let sheet = if is_workbook(path) {
        sheet_from_workbook(path, policy)
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open shop export {}", path.display()))?;
        sheet_from_reader(file, policy)
    };
    sheet.with_context(|| format!("failed to process shop export {}", path.display()))
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Run the engine over CSV bytes from any reader.
///
/// Headers are checked before any row is parsed, so a missing column fails
/// the whole run up front.
pub(crate) fn sheet_from_reader<R: Read>(
    reader: R,
    policy: RowPolicy,
) -> anyhow::Result<IntelligenceSheet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let header_cells: Vec<&str> = headers.iter().collect();
    let index = ColumnMap::default().resolve(&header_cells[..])?;

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = result.with_context(|| format!("failed to read data row {row}"))?;
        let fields: Vec<&str> = record.iter().collect();
        rows.push(index.parse_row(row, &fields[..]));
    }

    tracing::info!(rows = rows.len(), "loaded shop export");

    Ok(run_batch(rows, policy)?)
}

/// Run the engine over the first worksheet of a workbook.
///
/// The first row is the header row; every cell is read as text so numeric
/// cells go through the same money parsing as CSV input.
pub(crate) fn sheet_from_workbook(
    path: &Path,
    policy: RowPolicy,
) -> anyhow::Result<IntelligenceSheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("workbook {} has no sheets", path.display()))??;

    let mut grid = range.rows();
    let header_cells: Vec<String> = grid
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let index = ColumnMap::default().resolve(&header_cells[..])?;

    let rows: Vec<_> = grid
        .enumerate()
        .map(|(i, cells)| {
            let fields: Vec<String> = cells.iter().map(cell_text).collect();
            index.parse_row(i + 1, &fields[..])
        })
        .collect();

    tracing::info!(rows = rows.len(), "loaded shop workbook");

    Ok(run_batch(rows, policy)?)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use brandintel_engine::{EngineError, InvalidReason, PriorityTier, Segment};

    use super::*;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    const HEADER: &str = "Shop Name,Revenue(£),Avg. Unit Price(£),Self-Operated Account Revenue(£),Affiliate Revenue(£),Shopping Mall Revenue(£),KalodataUrl\n";

    #[test]
    fn loads_rows_into_sorted_sheet() {
        let csv = format!(
            "{HEADER}Small Co,1200,9.99,100,50,900,https://k/1\n\"Big, Ltd\",\"£10,000\",20,8000,1000,500,https://k/2\n"
        );
        let sheet = sheet_from_reader(csv.as_bytes(), RowPolicy::Exclude).unwrap();
        let records = sheet.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Big, Ltd");
        assert_eq!(records[0].segment, Segment::HighSelfOp);
        assert_eq!(records[1].name, "Small Co");
        assert_eq!(records[1].segment, Segment::HighMall);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let csv = "Shop Name,Revenue(£)\nSolo,100\n";
        let err = sheet_from_reader(csv.as_bytes(), RowPolicy::Exclude).unwrap_err();
        let schema = err
            .downcast_ref::<brandintel_engine::SchemaError>()
            .expect("expected SchemaError");
        assert!(schema.missing.contains(&"KalodataUrl".to_string()));
    }

    #[test]
    fn non_numeric_row_is_excluded_by_default() {
        let csv = format!("{HEADER}Odd,abc,1,1,1,1,u\nFine,900,1,0,0,0,u\n");
        let sheet = sheet_from_reader(csv.as_bytes(), RowPolicy::Exclude).unwrap();
        assert_eq!(sheet.records().len(), 1);
        assert_eq!(sheet.excluded().len(), 1);
        assert_eq!(sheet.excluded()[0].brand, "Odd");
    }

    #[test]
    fn non_numeric_row_fails_in_strict_mode() {
        let csv = format!("{HEADER}Odd,abc,1,1,1,1,u\n");
        let err = sheet_from_reader(csv.as_bytes(), RowPolicy::Strict).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::InvalidRecord(_))
        ));
    }

    #[test]
    fn workbook_extensions_are_detected() {
        assert!(is_workbook(Path::new("export.xlsx")));
        assert!(is_workbook(Path::new("EXPORT.XLS")));
        assert!(!is_workbook(Path::new("export.csv")));
        assert!(!is_workbook(Path::new("export")));
    }

    #[test]
    fn loads_kalodata_workbook() {
        let sheet = load_sheet(&fixture("kalodata_export.xlsx"), RowPolicy::Exclude).unwrap();
        let records = sheet.records();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "Glow Labs");
        assert_eq!(records[0].segment, Segment::HighMall);
        assert_eq!(records[0].tier, PriorityTier::A);
        assert_eq!(records[0].avg_unit_price, Some("14.99".parse().unwrap()));

        // blank mall cell reads as zero revenue
        assert_eq!(records[1].name, "Own Content Co");
        assert_eq!(records[1].segment, Segment::HighSelfOp);
        assert_eq!(records[1].tier, PriorityTier::B);
        assert!(records[1].shares.mall.is_zero());

        assert_eq!(sheet.excluded().len(), 1);
        assert_eq!(sheet.excluded()[0].brand, "Zero Revenue");
        assert_eq!(sheet.excluded()[0].row, 3);
        assert_eq!(
            sheet.excluded()[0].reason,
            InvalidReason::ZeroOrMissingRevenue
        );
    }

    #[test]
    fn workbook_zero_revenue_fails_in_strict_mode() {
        let err = load_sheet(&fixture("kalodata_export.xlsx"), RowPolicy::Strict).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::InvalidRecord(r)) if r.brand == "Zero Revenue"
        ));
    }
}
