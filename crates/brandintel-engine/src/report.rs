//! Segment breakdown and example views over an ordered sheet.

use crate::error::{InvalidReason, InvalidRecord};
use crate::types::{BrandIntelligenceRecord, Segment};

/// Processed vs. excluded row counts for one batch, with the reason each
/// excluded row was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub excluded: usize,
    pub exclusions: Vec<InvalidRecord>,
}

impl BatchReport {
    /// Excluded rows grouped by reason, in order of first occurrence.
    #[must_use]
    pub fn reason_counts(&self) -> Vec<(&InvalidReason, usize)> {
        let mut counts: Vec<(&InvalidReason, usize)> = Vec::new();
        for invalid in &self.exclusions {
            match counts
                .iter_mut()
                .find(|(reason, _)| same_kind(reason, &invalid.reason))
            {
                Some((_, count)) => *count += 1,
                None => counts.push((&invalid.reason, 1)),
            }
        }
        counts
    }
}

fn same_kind(a: &InvalidReason, b: &InvalidReason) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

/// Leading records of one segment, for the example-brands view.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentExamples<'a> {
    pub segment: Segment,
    /// Number of records in the segment, not just those in `examples`.
    pub total: usize,
    pub examples: Vec<&'a BrandIntelligenceRecord>,
}

/// Counts records per segment. Every segment is listed, zero or not.
#[must_use]
pub fn segment_breakdown(records: &[BrandIntelligenceRecord]) -> Vec<(Segment, usize)> {
    Segment::ALL
        .into_iter()
        .map(|segment| {
            let count = records.iter().filter(|r| r.segment == segment).count();
            (segment, count)
        })
        .collect()
}

/// Takes the first `per_segment` records of each segment in sheet order.
///
/// Segments with no records are omitted.
#[must_use]
pub fn segment_examples(
    records: &[BrandIntelligenceRecord],
    per_segment: usize,
) -> Vec<SegmentExamples<'_>> {
    Segment::ALL
        .into_iter()
        .filter_map(|segment| {
            let members: Vec<&BrandIntelligenceRecord> =
                records.iter().filter(|r| r.segment == segment).collect();
            if members.is_empty() {
                return None;
            }
            Some(SegmentExamples {
                segment,
                total: members.len(),
                examples: members.into_iter().take(per_segment).collect(),
            })
        })
        .collect()
}
