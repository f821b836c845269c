//! Errors raised by the sort contract.

use thiserror::Error;

/// Reason a sort request was rejected.
///
/// Every variant is produced before the target slice is touched, so a failed
/// call always leaves the input unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A required argument was absent.
    #[error("{name} cannot be absent")]
    InvalidArgument { name: &'static str },

    /// An index or count was negative or addressed elements past the end.
    #[error("{name} is out of range: {reason}")]
    OutOfRange {
        name: &'static str,
        reason: &'static str,
    },
}

impl SortError {
    pub(crate) const fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    pub(crate) const fn out_of_range(name: &'static str, reason: &'static str) -> Self {
        Self::OutOfRange { name, reason }
    }

    /// Name of the offending argument (`"list"`, `"comparer"`, `"index"` or `"count"`).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name } | Self::OutOfRange { name, .. } => *name,
        }
    }
}

/// Returned when an algorithm name cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sorting algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);
