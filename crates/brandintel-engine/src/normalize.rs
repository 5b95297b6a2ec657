//! Traffic-share derivation from raw channel revenue.

use rust_decimal::Decimal;

use crate::error::InvalidReason;
use crate::types::{RawBrandRecord, TrafficShares};

/// Derives unrounded per-channel traffic shares for one brand.
///
/// Each share is `channel_revenue / total_revenue * 100`, computed
/// independently; the three need not sum to 100. A blank channel cell counts
/// as zero revenue.
///
/// # Errors
///
/// Returns [`InvalidReason::ZeroOrMissingRevenue`] when total revenue is blank
/// or zero, and [`InvalidReason::ShareOverflow`] when a share does not fit in a
/// `Decimal`.
pub fn traffic_shares(record: &RawBrandRecord) -> Result<TrafficShares, InvalidReason> {
    let total = match record.total_revenue {
        Some(total) if !total.is_zero() => total,
        _ => return Err(InvalidReason::ZeroOrMissingRevenue),
    };

    Ok(TrafficShares {
        self_op: share_of(record.self_op_revenue, total)?,
        affiliate: share_of(record.affiliate_revenue, total)?,
        mall: share_of(record.mall_revenue, total)?,
    })
}

fn share_of(channel: Option<Decimal>, total: Decimal) -> Result<Decimal, InvalidReason> {
    let channel = channel.unwrap_or(Decimal::ZERO);
    channel
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .ok_or(InvalidReason::ShareOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn record(total: Option<&str>, self_op: Option<&str>, aff: Option<&str>, mall: Option<&str>) -> RawBrandRecord {
        RawBrandRecord {
            row: 1,
            name: "Test Brand".to_string(),
            url: "https://www.kalodata.com/shop/detail?id=1".to_string(),
            total_revenue: total.map(dec),
            avg_unit_price: Some(dec("12.99")),
            self_op_revenue: self_op.map(dec),
            affiliate_revenue: aff.map(dec),
            mall_revenue: mall.map(dec),
        }
    }

    #[test]
    fn computes_each_share_against_total() {
        let shares =
            traffic_shares(&record(Some("10000"), Some("6000"), Some("3000"), Some("1000"))).unwrap();
        assert_eq!(shares.self_op, dec("60"));
        assert_eq!(shares.affiliate, dec("30"));
        assert_eq!(shares.mall, dec("10"));
    }

    #[test]
    fn shares_need_not_sum_to_one_hundred() {
        let shares =
            traffic_shares(&record(Some("1000"), Some("200"), Some("100"), Some("100"))).unwrap();
        assert_eq!(shares.self_op + shares.affiliate + shares.mall, dec("40"));
    }

    #[test]
    fn zero_total_is_rejected() {
        let err = traffic_shares(&record(Some("0"), Some("10"), None, None)).unwrap_err();
        assert_eq!(err, InvalidReason::ZeroOrMissingRevenue);
    }

    #[test]
    fn missing_total_is_rejected() {
        let err = traffic_shares(&record(None, Some("10"), None, None)).unwrap_err();
        assert_eq!(err, InvalidReason::ZeroOrMissingRevenue);
    }

    #[test]
    fn missing_channels_count_as_zero() {
        let shares = traffic_shares(&record(Some("5000"), None, None, None)).unwrap();
        assert!(shares.self_op.is_zero());
        assert!(shares.affiliate.is_zero());
        assert!(shares.mall.is_zero());
    }

    #[test]
    fn shares_stay_unrounded() {
        let shares =
            traffic_shares(&record(Some("10000"), Some("6996"), Some("0"), Some("0"))).unwrap();
        assert_eq!(shares.self_op, dec("69.96"));
    }
}
