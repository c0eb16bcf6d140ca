//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification of a [`DomainError`].
///
/// Callers that only care about "bad input" vs "missing item" can match on
/// this instead of the individual variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
}

/// Domain-level error raised by ledger operations.
///
/// Keep this focused on deterministic input/state failures. File-system and
/// decoding failures belong to the persistence layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An argument was malformed or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A removal asked for more than is on hand.
    #[error("insufficient stock for '{item}': have {available:?}, remove {requested:?}")]
    InsufficientStock {
        item: String,
        available: f64,
        requested: f64,
    },

    /// The named item is not in the ledger.
    #[error("item '{0}' not found")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn insufficient_stock(item: impl Into<String>, available: f64, requested: f64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            available,
            requested,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidArgument(_) | DomainError::InsufficientStock { .. } => {
                ErrorKind::InvalidArgument
            }
            DomainError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
