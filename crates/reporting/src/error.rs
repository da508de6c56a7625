//! Error types for report delivery.

use thiserror::Error;

/// Errors that can occur while delivering a report.
///
/// These never escape the engine; delivery is best-effort and failures are
/// logged and dropped.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to serialize the payload
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network-level delivery failure
    #[error("network error: {0}")]
    Network(String),

    /// The analytics endpoint answered with a non-success status
    #[error("analytics endpoint returned status {0}")]
    Status(u16),
}

/// Result type for delivery operations.
pub type ReportResult<T> = Result<T, ReportError>;
