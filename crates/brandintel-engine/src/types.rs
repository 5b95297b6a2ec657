use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One brand row as handed over by the table loader.
///
/// Monetary fields are `None` when the cell was blank. Channel revenues are
/// not required to sum to `total_revenue`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBrandRecord {
    /// 1-based data row number in the source table, used in diagnostics.
    pub row: usize,
    pub name: String,
    pub url: String,
    pub total_revenue: Option<Decimal>,
    pub avg_unit_price: Option<Decimal>,
    pub self_op_revenue: Option<Decimal>,
    pub affiliate_revenue: Option<Decimal>,
    pub mall_revenue: Option<Decimal>,
}

/// Per-channel share of total revenue, in percent.
///
/// Values are unrounded; use [`TrafficShares::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficShares {
    pub self_op: Decimal,
    pub affiliate: Decimal,
    pub mall: Decimal,
}

impl TrafficShares {
    /// The shares rounded half-to-even to one decimal place, as shown in the sheet.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            self_op: one_decimal(self.self_op),
            affiliate: one_decimal(self.affiliate),
            mall: one_decimal(self.mall),
        }
    }
}

fn one_decimal(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(1);
    rounded.rescale(1);
    rounded
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    HighMall,
    HighSelfOp,
    LowAffiliate,
    Mixed,
}

impl Segment {
    /// Every segment, in classifier priority order.
    pub const ALL: [Segment; 4] = [
        Segment::HighMall,
        Segment::HighSelfOp,
        Segment::LowAffiliate,
        Segment::Mixed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::HighMall => "HIGH_MALL",
            Segment::HighSelfOp => "HIGH_SELF_OP",
            Segment::LowAffiliate => "LOW_AFFILIATE",
            Segment::Mixed => "MIXED",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Segment {
    type Err = EngineError;

    /// Accepts the canonical names case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_ascii_uppercase().replace('-', "_");
        Segment::ALL
            .into_iter()
            .find(|segment| segment.as_str() == canonical)
            .ok_or_else(|| EngineError::UnknownSegment(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PainPoint {
    #[serde(rename = "Platform Risk")]
    PlatformRisk,
    #[serde(rename = "Time Prison")]
    TimePrison,
    #[serde(rename = "Revenue Left on Table")]
    RevenueLeftOnTable,
    #[serde(rename = "Growth Opportunity")]
    GrowthOpportunity,
}

impl PainPoint {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PainPoint::PlatformRisk => "Platform Risk",
            PainPoint::TimePrison => "Time Prison",
            PainPoint::RevenueLeftOnTable => "Revenue Left on Table",
            PainPoint::GrowthOpportunity => "Growth Opportunity",
        }
    }
}

impl std::fmt::Display for PainPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Revenue bucket used to prioritise outreach. Orders `A < B < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    A,
    B,
    C,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 3] = [PriorityTier::A, PriorityTier::B, PriorityTier::C];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityTier::A => "A",
            PriorityTier::B => "B",
            PriorityTier::C => "C",
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(PriorityTier::A),
            "B" | "b" => Ok(PriorityTier::B),
            "C" | "c" => Ok(PriorityTier::C),
            _ => Err(EngineError::UnknownTier(s.to_string())),
        }
    }
}

/// Outreach copy fragments, exported as the three custom variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomCopy {
    /// Data-backed opener citing the brand's dominant channel figure.
    pub hook: String,
    pub framing: String,
    pub angle: String,
}

/// The fully derived row for one brand.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandIntelligenceRecord {
    pub name: String,
    pub url: String,
    pub total_revenue: Decimal,
    pub avg_unit_price: Option<Decimal>,
    pub shares: TrafficShares,
    pub segment: Segment,
    pub pain_point: PainPoint,
    pub tier: PriorityTier,
    pub copy: CustomCopy,
}

impl BrandIntelligenceRecord {
    /// Flatten into the export row, rounding shares for display.
    #[must_use]
    pub fn to_export_row(&self) -> ExportRow<'_> {
        let shares = self.shares.rounded();
        ExportRow {
            brand_name: &self.name,
            monthly_revenue: self.total_revenue,
            avg_unit_price: self.avg_unit_price,
            self_op_percent: shares.self_op,
            affiliate_percent: shares.affiliate,
            mall_percent: shares.mall,
            segment: self.segment,
            pain_point: self.pain_point,
            priority_tier: self.tier,
            custom_var_1: &self.copy.hook,
            custom_var_2: &self.copy.framing,
            custom_var_3: &self.copy.angle,
            brand_url: &self.url,
        }
    }
}

/// Export view of a [`BrandIntelligenceRecord`].
///
/// Field order is the column order consumers rely on; [`ExportRow::COLUMNS`]
/// lists the serialized names in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow<'a> {
    #[serde(rename = "Brand_Name")]
    pub brand_name: &'a str,
    #[serde(rename = "Monthly_Revenue_GBP")]
    pub monthly_revenue: Decimal,
    #[serde(rename = "Avg_Unit_Price_GBP")]
    pub avg_unit_price: Option<Decimal>,
    #[serde(rename = "Self_Op_Percent")]
    pub self_op_percent: Decimal,
    #[serde(rename = "Affiliate_Percent")]
    pub affiliate_percent: Decimal,
    #[serde(rename = "Mall_Percent")]
    pub mall_percent: Decimal,
    #[serde(rename = "Segment")]
    pub segment: Segment,
    #[serde(rename = "Primary_Pain_Point")]
    pub pain_point: PainPoint,
    #[serde(rename = "Priority_Tier")]
    pub priority_tier: PriorityTier,
    #[serde(rename = "Custom_Var_1")]
    pub custom_var_1: &'a str,
    #[serde(rename = "Custom_Var_2")]
    pub custom_var_2: &'a str,
    #[serde(rename = "Custom_Var_3")]
    pub custom_var_3: &'a str,
    #[serde(rename = "Brand_URL")]
    pub brand_url: &'a str,
}

impl ExportRow<'_> {
    pub const COLUMNS: [&'static str; 13] = [
        "Brand_Name",
        "Monthly_Revenue_GBP",
        "Avg_Unit_Price_GBP",
        "Self_Op_Percent",
        "Affiliate_Percent",
        "Mall_Percent",
        "Segment",
        "Primary_Pain_Point",
        "Priority_Tier",
        "Custom_Var_1",
        "Custom_Var_2",
        "Custom_Var_3",
        "Brand_URL",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn segment_parses_case_insensitively() {
        assert_eq!("high_mall".parse::<Segment>().unwrap(), Segment::HighMall);
        assert_eq!(
            "low-affiliate".parse::<Segment>().unwrap(),
            Segment::LowAffiliate
        );
        assert_eq!("MIXED".parse::<Segment>().unwrap(), Segment::Mixed);
    }

    #[test]
    fn segment_rejects_unknown_name() {
        let err = "HIGH_AFFILIATE".parse::<Segment>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownSegment(ref s) if s == "HIGH_AFFILIATE"));
    }

    #[test]
    fn tier_orders_a_before_c() {
        assert!(PriorityTier::A < PriorityTier::B);
        assert!(PriorityTier::B < PriorityTier::C);
    }

    #[test]
    fn tier_rejects_unknown_letter() {
        assert!("D".parse::<PriorityTier>().is_err());
        assert_eq!("b".parse::<PriorityTier>().unwrap(), PriorityTier::B);
    }

    #[test]
    fn rounded_shares_keep_one_decimal_place() {
        let shares = TrafficShares {
            self_op: dec("69.96"),
            affiliate: dec("0"),
            mall: dec("12.25"),
        };
        let rounded = shares.rounded();
        assert_eq!(rounded.self_op.to_string(), "70.0");
        assert_eq!(rounded.affiliate.to_string(), "0.0");
        // half-to-even
        assert_eq!(rounded.mall.to_string(), "12.2");
    }

    #[test]
    fn segment_and_pain_point_serialize_to_sheet_labels() {
        assert_eq!(
            serde_json::to_string(&Segment::LowAffiliate).unwrap(),
            "\"LOW_AFFILIATE\""
        );
        assert_eq!(
            serde_json::to_string(&PainPoint::RevenueLeftOnTable).unwrap(),
            "\"Revenue Left on Table\""
        );
    }
}
