//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rejected plant mutations.
/// The entity that produced one is left in its last valid state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("negative height rejected for {name}: {value}cm")]
    NegativeHeight { name: String, value: i64 },

    #[error("negative age rejected for {name}: {value} days")]
    NegativeAge { name: String, value: i64 },

    #[error("{field} out of range for {name}: {value}")]
    ValueOutOfRange {
        name: String,
        field: &'static str,
        value: i64,
    },

    #[error("{0} is not a prize flower")]
    NotPrizeFlower(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
