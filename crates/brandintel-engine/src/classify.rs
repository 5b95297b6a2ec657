//! Segment classification and pain-point lookup.

use crate::thresholds::{HIGH_MALL_MIN_SHARE, HIGH_SELF_OP_MIN_SHARE, LOW_AFFILIATE_MAX_SHARE};
use crate::types::{PainPoint, Segment, TrafficShares};

/// Assigns exactly one segment to a brand from its unrounded traffic shares.
///
/// Rules are checked in priority order and the first match wins, so a brand
/// that is both mall-heavy and self-op-heavy is `HIGH_MALL`.
#[must_use]
pub fn classify(shares: &TrafficShares) -> Segment {
    if shares.mall >= HIGH_MALL_MIN_SHARE {
        Segment::HighMall
    } else if shares.self_op >= HIGH_SELF_OP_MIN_SHARE {
        Segment::HighSelfOp
    } else if shares.affiliate < LOW_AFFILIATE_MAX_SHARE {
        Segment::LowAffiliate
    } else {
        Segment::Mixed
    }
}

#[must_use]
pub fn pain_point(segment: Segment) -> PainPoint {
    match segment {
        Segment::HighMall => PainPoint::PlatformRisk,
        Segment::HighSelfOp => PainPoint::TimePrison,
        Segment::LowAffiliate => PainPoint::RevenueLeftOnTable,
        Segment::Mixed => PainPoint::GrowthOpportunity,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn shares(self_op: &str, affiliate: &str, mall: &str) -> TrafficShares {
        TrafficShares {
            self_op: self_op.parse::<Decimal>().unwrap(),
            affiliate: affiliate.parse::<Decimal>().unwrap(),
            mall: mall.parse::<Decimal>().unwrap(),
        }
    }

    #[test]
    fn mall_at_fifty_is_high_mall() {
        assert_eq!(classify(&shares("0", "0", "50.0")), Segment::HighMall);
    }

    #[test]
    fn mall_wins_over_self_op() {
        assert_eq!(classify(&shares("80", "0", "55")), Segment::HighMall);
    }

    #[test]
    fn self_op_at_seventy_is_high_self_op() {
        assert_eq!(classify(&shares("70.0", "20", "49.9")), Segment::HighSelfOp);
    }

    #[test]
    fn affiliate_below_ten_is_low_affiliate() {
        assert_eq!(classify(&shares("69.9", "9.9", "0")), Segment::LowAffiliate);
    }

    #[test]
    fn affiliate_at_ten_is_mixed() {
        assert_eq!(classify(&shares("69.9", "10.0", "49.9")), Segment::Mixed);
    }

    #[test]
    fn unrounded_self_op_just_under_seventy_does_not_qualify() {
        assert_eq!(classify(&shares("69.96", "25", "5")), Segment::Mixed);
    }

    #[test]
    fn all_zero_shares_are_low_affiliate() {
        assert_eq!(classify(&shares("0", "0", "0")), Segment::LowAffiliate);
    }

    #[test]
    fn pain_points_follow_segment() {
        assert_eq!(pain_point(Segment::HighMall).label(), "Platform Risk");
        assert_eq!(pain_point(Segment::HighSelfOp).label(), "Time Prison");
        assert_eq!(
            pain_point(Segment::LowAffiliate).label(),
            "Revenue Left on Table"
        );
        assert_eq!(pain_point(Segment::Mixed).label(), "Growth Opportunity");
    }
}
