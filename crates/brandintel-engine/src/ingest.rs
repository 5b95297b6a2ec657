//! Header validation and cell parsing for shop export tables.
//!
//! The caller owns the file format; this module only needs the header row
//! and each data row as string cells.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{InvalidReason, InvalidRecord, SchemaError};
use crate::types::RawBrandRecord;

/// Column headers for each field the engine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: String,
    pub url: String,
    pub total_revenue: String,
    pub avg_unit_price: String,
    pub self_op_revenue: String,
    pub affiliate_revenue: String,
    pub mall_revenue: String,
}

impl Default for ColumnMap {
    /// Headers of the Kalodata shop export.
    fn default() -> Self {
        Self {
            name: "Shop Name".to_string(),
            url: "KalodataUrl".to_string(),
            total_revenue: "Revenue(£)".to_string(),
            avg_unit_price: "Avg. Unit Price(£)".to_string(),
            self_op_revenue: "Self-Operated Account Revenue(£)".to_string(),
            affiliate_revenue: "Affiliate Revenue(£)".to_string(),
            mall_revenue: "Shopping Mall Revenue(£)".to_string(),
        }
    }
}

impl ColumnMap {
    /// Locates every required column in `headers`.
    ///
    /// Header matching ignores surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] naming every column that is absent.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> Result<ColumnIndex, SchemaError> {
        let mut missing = Vec::new();
        let mut find = |column: &str| -> usize {
            headers
                .iter()
                .position(|h| h.as_ref().trim() == column)
                .unwrap_or_else(|| {
                    missing.push(column.to_string());
                    usize::MAX
                })
        };

        let index = ColumnIndex {
            name: find(self.name.as_str()),
            url: find(self.url.as_str()),
            total_revenue: find(self.total_revenue.as_str()),
            avg_unit_price: find(self.avg_unit_price.as_str()),
            self_op_revenue: find(self.self_op_revenue.as_str()),
            affiliate_revenue: find(self.affiliate_revenue.as_str()),
            mall_revenue: find(self.mall_revenue.as_str()),
            columns: self.clone(),
        };

        if missing.is_empty() {
            Ok(index)
        } else {
            Err(SchemaError { missing })
        }
    }
}

/// Resolved positions of the required columns within a table.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    name: usize,
    url: usize,
    total_revenue: usize,
    avg_unit_price: usize,
    self_op_revenue: usize,
    affiliate_revenue: usize,
    mall_revenue: usize,
    columns: ColumnMap,
}

impl ColumnIndex {
    /// Parses one data row. Cells past the end of a short row read as blank.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord`] with [`InvalidReason::NonNumericField`] when a
    /// monetary cell is neither blank nor a number.
    pub fn parse_row<S: AsRef<str>>(
        &self,
        row: usize,
        fields: &[S],
    ) -> Result<RawBrandRecord, InvalidRecord> {
        let cell = |idx: usize| fields.get(idx).map_or("", |f| f.as_ref().trim());
        let name = cell(self.name).to_string();

        let money = |idx: usize, column: &str| -> Result<Option<Decimal>, InvalidRecord> {
            parse_money(cell(idx)).map_err(|()| InvalidRecord {
                row,
                brand: name.clone(),
                reason: InvalidReason::NonNumericField {
                    column: column.to_string(),
                    value: cell(idx).to_string(),
                },
            })
        };

        Ok(RawBrandRecord {
            row,
            total_revenue: money(self.total_revenue, &self.columns.total_revenue)?,
            avg_unit_price: money(self.avg_unit_price, &self.columns.avg_unit_price)?,
            self_op_revenue: money(self.self_op_revenue, &self.columns.self_op_revenue)?,
            affiliate_revenue: money(self.affiliate_revenue, &self.columns.affiliate_revenue)?,
            mall_revenue: money(self.mall_revenue, &self.columns.mall_revenue)?,
            url: cell(self.url).to_string(),
            name,
        })
    }
}

/// Parses a monetary cell such as `12,345.67`, `£9,500` or `1.2e4`.
///
/// Blank and placeholder cells (`nan`, `null`, `n/a`, `-`) are `Ok(None)`.
fn parse_money(raw: &str) -> Result<Option<Decimal>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || ["nan", "null", "none", "n/a", "-"]
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
    {
        return Ok(None);
    }

    let cleaned: String = trimmed
        .trim_start_matches(['£', '$', '€'])
        .chars()
        .filter(|c| *c != ',')
        .collect();

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map(Some)
        .map_err(|_| ())
}
