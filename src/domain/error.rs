//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of chart naming and endpoint rules.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid chart name {name:?}: {reason}")]
    InvalidChartName { name: String, reason: String },

    #[error("invalid target {target:?}: {reason}")]
    InvalidTarget { target: String, reason: String },
}
