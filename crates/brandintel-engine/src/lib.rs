//! Brand segmentation and outreach-copy engine.
//!
//! Turns per-channel revenue figures from a shop export into an intelligence
//! sheet: traffic shares, a traffic segment, a pain point, three lines of
//! outreach copy and a revenue tier per brand, sorted for outreach and
//! filterable by segment and tier. The engine is a stateless library: table
//! loading and export encoding belong to the caller.

pub mod classify;
pub mod copy;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod thresholds;
pub mod tier;
pub mod types;

pub use classify::{classify, pain_point};
pub use copy::generate_copy;
pub use error::{EngineError, InvalidReason, InvalidRecord, SchemaError};
pub use filter::{RecordFilter, Selection};
pub use ingest::{ColumnIndex, ColumnMap};
pub use normalize::traffic_shares;
pub use pipeline::{process_record, run_batch, sort_records, IntelligenceSheet, RowPolicy};
pub use report::{segment_breakdown, segment_examples, BatchReport, SegmentExamples};
pub use tier::priority_tier;
pub use types::{
    BrandIntelligenceRecord, CustomCopy, ExportRow, PainPoint, PriorityTier, RawBrandRecord,
    Segment, TrafficShares,
};
