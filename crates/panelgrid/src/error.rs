//! Error type shared by the kernel.
//!
//! Predicates and measurements return plain values for every finite input.
//! `GeomError` is reserved for input the kernel cannot give a meaning to.

use std::fmt;

/// Errors surfaced by fallible kernel operations.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Non-finite coordinates, an empty path where points are required, or a
    /// non-positive layout dimension.
    InvalidInput { reason: String },
    /// Normalizing a zero-length vector.
    DivideByZero,
    /// A packing configuration that cannot guarantee forward progress.
    NonTerminationRisk { reason: String },
    /// The packing scan evaluated more candidates than its configured cap.
    IterationCapExceeded { cap: usize },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn non_termination(reason: impl Into<String>) -> Self {
        Self::NonTerminationRisk {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::DivideByZero => write!(f, "cannot normalize a zero-length vector"),
            Self::NonTerminationRisk { reason } => {
                write!(f, "packing configuration cannot make progress: {reason}")
            }
            Self::IterationCapExceeded { cap } => {
                write!(f, "packing scan exceeded {cap} candidate evaluations")
            }
        }
    }
}

impl std::error::Error for GeomError {}

/// Reject a non-finite coordinate with a message naming `what`.
#[inline]
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<(), GeomError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeomError::invalid(format!("{what} must be finite, got {value}")))
    }
}
