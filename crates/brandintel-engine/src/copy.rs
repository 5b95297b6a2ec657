//! Outreach copy templates.
//!
//! Figures in the copy are the sheet's one-decimal shares rounded
//! half-to-even to whole percent, so the text always agrees with the exported
//! percentage columns.

use rust_decimal::Decimal;

use crate::types::{CustomCopy, Segment, TrafficShares};

/// Builds the hook, framing and angle lines for a brand.
#[must_use]
pub fn generate_copy(segment: Segment, shares: &TrafficShares) -> CustomCopy {
    let shown = shares.rounded();
    match segment {
        Segment::HighMall => CustomCopy {
            hook: format!(
                "{}% of your traffic is rented from TikTok Mall",
                whole_percent(shown.mall)
            ),
            framing: "mall dependency".to_string(),
            angle: "platform risk is real - one algo change could impact revenue".to_string(),
        },
        Segment::HighSelfOp => CustomCopy {
            hook: format!(
                "{}% of traffic through your own content",
                whole_percent(shown.self_op)
            ),
            framing: "running everything yourself".to_string(),
            angle: "scaling without burning yourself out".to_string(),
        },
        Segment::LowAffiliate => CustomCopy {
            hook: format!(
                "only {}% affiliate traffic",
                whole_percent(shown.affiliate)
            ),
            // Illustrative only: the three shares are not a partition of revenue.
            framing: format!(
                "{}% of revenue channels untapped",
                whole_percent(Decimal::ONE_HUNDRED - shown.affiliate)
            ),
            angle: "competitors are outpacing you on affiliates".to_string(),
        },
        Segment::Mixed => CustomCopy {
            hook: mixed_hook(shares, &shown),
            framing: "balanced traffic mix".to_string(),
            angle: "opportunity to optimize your channel strategy".to_string(),
        },
    }
}

/// Hook for the dominant channel of a mixed brand.
///
/// Dominance is judged on unrounded shares; ties go to self-op, then mall.
fn mixed_hook(shares: &TrafficShares, shown: &TrafficShares) -> String {
    if shares.self_op >= shares.mall && shares.self_op >= shares.affiliate {
        format!(
            "{}% self-operated but room to scale with affiliates",
            whole_percent(shown.self_op)
        )
    } else if shares.mall >= shares.affiliate {
        format!(
            "{}% mall traffic with room to diversify",
            whole_percent(shown.mall)
        )
    } else {
        format!(
            "{}% affiliate but could diversify further",
            whole_percent(shown.affiliate)
        )
    }
}

fn whole_percent(value: Decimal) -> Decimal {
    value.round_dp(0).normalize()
}
