//! `breakdown` command: segment counts and example brands.

use std::path::Path;

use brandintel_engine::{BrandIntelligenceRecord, RowPolicy, Segment};
use rust_decimal::Decimal;

use crate::load::load_sheet;

/// Print per-segment counts followed by up to `per_segment` example brands
/// for each non-empty segment.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded or, in strict mode, any
/// row is invalid.
pub(crate) fn run_breakdown(input: &Path, per_segment: usize, strict: bool) -> anyhow::Result<()> {
    let sheet = load_sheet(input, RowPolicy::from_strict(strict))?;
    let report = sheet.report();
    println!(
        "processed {} brands ({} excluded)",
        report.processed, report.excluded
    );
    println!();

    println!("SEGMENT BREAKDOWN");
    for (segment, count) in sheet.breakdown() {
        println!(
            "  {:<15}{:>5}  {}",
            segment.as_str(),
            count,
            segment_caption(segment)
        );
    }

    for group in sheet.examples(per_segment) {
        println!();
        println!("{} ({} brands)", group.segment, group.total);
        for record in &group.examples {
            print_example(record);
        }
    }

    Ok(())
}

fn segment_caption(segment: Segment) -> &'static str {
    match segment {
        Segment::HighMall => "50%+ mall traffic",
        Segment::HighSelfOp => "70%+ self-operated",
        Segment::LowAffiliate => "<10% affiliate",
        Segment::Mixed => "mixed traffic",
    }
}

fn print_example(record: &BrandIntelligenceRecord) {
    let shares = record.shares.rounded();
    println!("  {}", record.name);
    println!(
        "    Revenue: £{} | Avg Price: £{}",
        format_money(record.total_revenue),
        record
            .avg_unit_price
            .map_or_else(|| "-".to_string(), format_money),
    );
    println!(
        "    Traffic: {}% self / {}% aff / {}% mall",
        whole(shares.self_op),
        whole(shares.affiliate),
        whole(shares.mall)
    );
    println!("    Pain Point: {}", record.pain_point);
    println!("    Email Hook: \"{}\"", record.copy.hook);
}

/// Two decimal places with thousands separators, e.g. `12,500.00`.
fn format_money(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

fn whole(value: Decimal) -> Decimal {
    value.round_dp(0).normalize()
}
