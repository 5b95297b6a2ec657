use thiserror::Error;

/// A required column is absent from the input table.
///
/// Raised once per batch, before any row is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required column(s) missing from input: {}", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Why a single row could not be turned into a brand record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("zero_or_missing_revenue")]
    ZeroOrMissingRevenue,

    #[error("non_numeric_field: {column} = {value:?}")]
    NonNumericField { column: String, value: String },

    #[error("share_overflow")]
    ShareOverflow,
}

/// A row that failed normalization. Excluded from the sheet by default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record at row {row} ({brand}): {reason}")]
pub struct InvalidRecord {
    pub row: usize,
    pub brand: String,
    pub reason: InvalidReason,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecord),

    #[error("unknown segment: {0}")]
    UnknownSegment(String),

    #[error("unknown priority tier: {0}")]
    UnknownTier(String),
}
