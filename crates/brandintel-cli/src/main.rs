mod analyze;
mod breakdown;
mod export;
mod load;

use std::path::PathBuf;

use brandintel_engine::{PriorityTier, Segment};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(name = "brandintel-cli")]
#[command(about = "Brand segmentation and outreach copy from shop revenue exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the brand intelligence sheet, print it and write the export
    Analyze {
        /// Shop export (.xlsx/.xls workbook or CSV) with revenue-by-channel columns
        #[arg(long)]
        input: PathBuf,

        /// Export destination (defaults to `BRANDINTEL_OUTPUT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Fail the run on the first invalid row instead of excluding it
        #[arg(long)]
        strict: bool,

        /// Only show these segments (repeatable or comma-separated)
        #[arg(long = "segment", value_delimiter = ',', value_parser = parse_segment)]
        segments: Vec<Segment>,

        /// Only show these priority tiers (repeatable or comma-separated)
        #[arg(long = "tier", value_delimiter = ',', value_parser = parse_tier)]
        tiers: Vec<PriorityTier>,

        /// Apply the segment/tier filters to the export as well as the printed view
        #[arg(long)]
        filtered_export: bool,
    },
    /// Show brand counts per segment with example brands and email hooks
    Breakdown {
        /// Shop export (.xlsx/.xls workbook or CSV) with revenue-by-channel columns
        #[arg(long)]
        input: PathBuf,

        /// Example brands per segment (defaults to `BRANDINTEL_EXAMPLES_PER_SEGMENT`)
        #[arg(long)]
        examples: Option<usize>,

        /// Fail the run on the first invalid row instead of excluding it
        #[arg(long)]
        strict: bool,
    },
}

fn parse_segment(raw: &str) -> Result<Segment, String> {
    raw.parse().map_err(|e| format!("{e}"))
}

fn parse_tier(raw: &str) -> Result<PriorityTier, String> {
    raw.parse().map_err(|e| format!("{e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = brandintel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Analyze {
            input,
            output,
            format,
            strict,
            segments,
            tiers,
            filtered_export,
        } => {
            let output = output.unwrap_or_else(|| config.output_path.clone());
            analyze::run_analyze(&analyze::AnalyzeOptions {
                input,
                output,
                format,
                strict: strict || config.strict,
                segments,
                tiers,
                filtered_export,
            })
        }
        Commands::Breakdown {
            input,
            examples,
            strict,
        } => breakdown::run_breakdown(
            &input,
            examples.unwrap_or(config.examples_per_segment),
            strict || config.strict,
        ),
    }
}
