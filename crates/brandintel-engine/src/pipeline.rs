//! Batch orchestration: per-row derivation, exclusion policy and ordering.

use crate::classify::{classify, pain_point};
use crate::copy::generate_copy;
use crate::error::{EngineError, InvalidRecord};
use crate::filter::RecordFilter;
use crate::normalize::traffic_shares;
use crate::report::{segment_breakdown, segment_examples, BatchReport, SegmentExamples};
use crate::tier::priority_tier;
use crate::types::{BrandIntelligenceRecord, RawBrandRecord, Segment};

/// What to do with a row that fails normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Drop the row, keep it in [`IntelligenceSheet::excluded`], carry on.
    #[default]
    Exclude,
    /// Fail the whole batch on the first invalid row.
    Strict,
}

impl RowPolicy {
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            RowPolicy::Strict
        } else {
            RowPolicy::Exclude
        }
    }
}

/// Derives the full intelligence record for one brand.
///
/// Pure: the result depends only on `raw`.
///
/// # Errors
///
/// Returns [`InvalidRecord`] when the brand's traffic shares cannot be
/// computed (zero or missing total revenue).
pub fn process_record(raw: RawBrandRecord) -> Result<BrandIntelligenceRecord, InvalidRecord> {
    let shares = match traffic_shares(&raw) {
        Ok(shares) => shares,
        Err(reason) => {
            return Err(InvalidRecord {
                row: raw.row,
                brand: raw.name,
                reason,
            })
        }
    };
    // Present and non-zero once shares exist.
    let total_revenue = raw.total_revenue.unwrap_or_default();

    let segment = classify(&shares);
    Ok(BrandIntelligenceRecord {
        pain_point: pain_point(segment),
        tier: priority_tier(total_revenue),
        copy: generate_copy(segment, &shares),
        segment,
        shares,
        total_revenue,
        avg_unit_price: raw.avg_unit_price,
        name: raw.name,
        url: raw.url,
    })
}

/// Orders records by tier (`A` first), then by revenue, highest first.
///
/// The sort is stable, so equal keys keep their input order.
pub fn sort_records(records: &mut [BrandIntelligenceRecord]) {
    records.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.total_revenue.cmp(&a.total_revenue))
    });
}

/// Runs the whole pipeline over a table's rows.
///
/// `rows` carries loader results so that rows the loader already rejected
/// (non-numeric cells) go through the same exclusion policy as rows that fail
/// normalization.
///
/// # Errors
///
/// Under [`RowPolicy::Strict`], returns [`EngineError::InvalidRecord`] for the
/// first row that fails. Under [`RowPolicy::Exclude`] this never fails.
pub fn run_batch<I>(rows: I, policy: RowPolicy) -> Result<IntelligenceSheet, EngineError>
where
    I: IntoIterator<Item = Result<RawBrandRecord, InvalidRecord>>,
{
    let mut records = Vec::new();
    let mut excluded = Vec::new();

    for row in rows {
        match row.and_then(process_record) {
            Ok(record) => records.push(record),
            Err(invalid) if policy == RowPolicy::Strict => {
                tracing::error!(
                    row = invalid.row,
                    brand = %invalid.brand,
                    reason = %invalid.reason,
                    "invalid row in strict mode; aborting batch"
                );
                return Err(invalid.into());
            }
            Err(invalid) => {
                tracing::warn!(
                    row = invalid.row,
                    brand = %invalid.brand,
                    reason = %invalid.reason,
                    "excluding invalid row"
                );
                excluded.push(invalid);
            }
        }
    }

    sort_records(&mut records);

    tracing::info!(
        processed = records.len(),
        excluded = excluded.len(),
        "brand intelligence batch complete"
    );

    Ok(IntelligenceSheet { records, excluded })
}

/// The ordered output of one batch plus the rows it left out.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceSheet {
    records: Vec<BrandIntelligenceRecord>,
    excluded: Vec<InvalidRecord>,
}

impl IntelligenceSheet {
    /// Records in canonical order: tier ascending, revenue descending.
    #[must_use]
    pub fn records(&self) -> &[BrandIntelligenceRecord] {
        &self.records
    }

    #[must_use]
    pub fn excluded(&self) -> &[InvalidRecord] {
        &self.excluded
    }

    #[must_use]
    pub fn report(&self) -> BatchReport {
        BatchReport {
            processed: self.records.len(),
            excluded: self.excluded.len(),
            exclusions: self.excluded.clone(),
        }
    }

    #[must_use]
    pub fn filter(&self, filter: &RecordFilter) -> Vec<&BrandIntelligenceRecord> {
        filter.apply(&self.records)
    }

    #[must_use]
    pub fn breakdown(&self) -> Vec<(Segment, usize)> {
        segment_breakdown(&self.records)
    }

    #[must_use]
    pub fn examples(&self, per_segment: usize) -> Vec<SegmentExamples<'_>> {
        segment_examples(&self.records, per_segment)
    }
}
