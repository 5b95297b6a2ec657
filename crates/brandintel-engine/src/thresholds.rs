//! Classification and tiering thresholds.
//!
//! Shares are percentages in `[0, 100]` for well-formed rows; revenue figures
//! are in the export's currency unit.

use rust_decimal::Decimal;

/// Mall share at or above which a brand is `HIGH_MALL`.
pub const HIGH_MALL_MIN_SHARE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Self-operated share at or above which a brand is `HIGH_SELF_OP`.
pub const HIGH_SELF_OP_MIN_SHARE: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Affiliate share strictly below which a brand is `LOW_AFFILIATE`.
pub const LOW_AFFILIATE_MAX_SHARE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Lowest monthly revenue that lands in tier A.
pub const TIER_A_MIN_REVENUE: Decimal = Decimal::from_parts(9500, 0, 0, false, 0);

/// Lowest monthly revenue that lands in tier B.
pub const TIER_B_MIN_REVENUE: Decimal = Decimal::from_parts(8000, 0, 0, false, 0);
