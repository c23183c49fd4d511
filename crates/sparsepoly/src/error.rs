//! Errors reported by term store operations.

use thiserror::Error;

use crate::term::Power;

/// Errors that can occur while mutating or combining term stores.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum PolyError {
    /// A negative power was passed to a mutation.
    #[error("invalid power {0}: powers must be nonnegative")]
    InvalidPower(i64),

    /// Two stores over different variables were combined.
    #[error("variable mismatch: {left} vs {right}")]
    VariableMismatch { left: char, right: char },

    /// A product term's power does not fit in [`Power`].
    #[error("power overflow: {left} + {right}")]
    PowerOverflow { left: Power, right: Power },
}

/// Result alias for term store operations.
pub type Result<T> = std::result::Result<T, PolyError>;
