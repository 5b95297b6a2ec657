use rust_decimal::Decimal;

use crate::thresholds::{TIER_A_MIN_REVENUE, TIER_B_MIN_REVENUE};
use crate::types::PriorityTier;

/// Buckets a brand by monthly revenue. Lower bounds are inclusive.
#[must_use]
pub fn priority_tier(total_revenue: Decimal) -> PriorityTier {
    if total_revenue >= TIER_A_MIN_REVENUE {
        PriorityTier::A
    } else if total_revenue >= TIER_B_MIN_REVENUE {
        PriorityTier::B
    } else {
        PriorityTier::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(s: &str) -> PriorityTier {
        priority_tier(s.parse().unwrap())
    }

    #[test]
    fn boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(tier("9500.00"), PriorityTier::A);
        assert_eq!(tier("9499.99"), PriorityTier::B);
        assert_eq!(tier("8000.00"), PriorityTier::B);
        assert_eq!(tier("7999.99"), PriorityTier::C);
    }

    #[test]
    fn large_and_small_revenues() {
        assert_eq!(tier("1250000"), PriorityTier::A);
        assert_eq!(tier("0.01"), PriorityTier::C);
        assert_eq!(tier("-50"), PriorityTier::C);
    }
}
