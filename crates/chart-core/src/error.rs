// File: crates/chart-core/src/error.rs
// Summary: Error type shared by aggregation, chart components, and state import/export.

use thiserror::Error;

/// Errors surfaced by the chart core. Degenerate data (empty lists, zero totals,
/// a single day) is not an error; it yields empty geometry instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A record violates an input-shape invariant (e.g. a negative amount).
    #[error("invalid purchase record {id}: {reason}")]
    InvalidInput { id: i64, reason: String },

    /// Chart state could not be serialized or restored.
    #[error("chart state error: {0}")]
    State(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::State(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
