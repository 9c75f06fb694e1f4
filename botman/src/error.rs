//! Error types for snapshot retrieval and validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("cpu usage {0} is outside 0..=100")]
    CpuOutOfRange(f32),
    #[error("core count must be positive")]
    NoCores,
    #[error("{field} ({value}) exceeds its total ({total})")]
    Exceeds {
        field: &'static str,
        value: u64,
        total: u64,
    },
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("snapshot unavailable: {0}")]
    Unavailable(String),
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] ValidationError),
}
