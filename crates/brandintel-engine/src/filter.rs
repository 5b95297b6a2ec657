//! Read-only segment/tier filtering over an assembled sheet.

use std::collections::BTreeSet;

use crate::types::{BrandIntelligenceRecord, PriorityTier, Segment};

/// A multi-value selector: either everything, or an explicit set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Ord> Selection<T> {
    /// Builds a selector from user choices; no choices means no filtering.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let set: BTreeSet<T> = values.into_iter().collect();
        if set.is_empty() {
            Selection::All
        } else {
            Selection::Only(set)
        }
    }

    pub fn allows(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => set.contains(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFilter {
    pub segments: Selection<Segment>,
    pub tiers: Selection<PriorityTier>,
}

impl RecordFilter {
    #[must_use]
    pub fn new(segments: Selection<Segment>, tiers: Selection<PriorityTier>) -> Self {
        Self { segments, tiers }
    }

    #[must_use]
    pub fn matches(&self, record: &BrandIntelligenceRecord) -> bool {
        self.segments.allows(&record.segment) && self.tiers.allows(&record.tier)
    }

    /// Returns the matching records, preserving input order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        records: &'a [BrandIntelligenceRecord],
    ) -> Vec<&'a BrandIntelligenceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{CustomCopy, PainPoint, TrafficShares};

    fn record(name: &str, segment: Segment, tier: PriorityTier) -> BrandIntelligenceRecord {
        BrandIntelligenceRecord {
            name: name.to_string(),
            url: String::new(),
            total_revenue: Decimal::ONE_THOUSAND,
            avg_unit_price: None,
            shares: TrafficShares {
                self_op: Decimal::ZERO,
                affiliate: Decimal::ZERO,
                mall: Decimal::ZERO,
            },
            segment,
            pain_point: PainPoint::GrowthOpportunity,
            tier,
            copy: CustomCopy {
                hook: String::new(),
                framing: String::new(),
                angle: String::new(),
            },
        }
    }

    fn names(records: &[&BrandIntelligenceRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn sample() -> Vec<BrandIntelligenceRecord> {
        vec![
            record("one", Segment::HighMall, PriorityTier::A),
            record("two", Segment::Mixed, PriorityTier::A),
            record("three", Segment::HighMall, PriorityTier::B),
            record("four", Segment::LowAffiliate, PriorityTier::C),
        ]
    }

    #[test]
    fn default_filter_passes_everything_through() {
        let records = sample();
        let filtered = RecordFilter::default().apply(&records);
        assert_eq!(names(&filtered), ["one", "two", "three", "four"]);
    }

    #[test]
    fn empty_selection_means_all() {
        assert_eq!(Selection::<Segment>::from_values([]), Selection::All);
    }

    #[test]
    fn segment_filter_keeps_order() {
        let records = sample();
        let filter = RecordFilter::new(
            Selection::from_values([Segment::HighMall]),
            Selection::All,
        );
        assert_eq!(names(&filter.apply(&records)), ["one", "three"]);
    }

    #[test]
    fn segment_and_tier_filters_combine() {
        let records = sample();
        let filter = RecordFilter::new(
            Selection::from_values([Segment::HighMall, Segment::LowAffiliate]),
            Selection::from_values([PriorityTier::B, PriorityTier::C]),
        );
        assert_eq!(names(&filter.apply(&records)), ["three", "four"]);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let records = sample();
        let filter = RecordFilter::new(
            Selection::from_values([Segment::HighSelfOp]),
            Selection::All,
        );
        assert!(filter.apply(&records).is_empty());
    }
}
