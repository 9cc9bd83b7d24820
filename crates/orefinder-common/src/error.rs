//! Error types for orefinder.

use thiserror::Error;

use crate::mineral::MineralKind;

/// Errors reported by deposit queries.
///
/// Every variant except [`FinderError::InternalGenerationFault`] is a caller
/// error; none of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// Version tag outside the supported set
    #[error("Unsupported version: {0:?}")]
    UnsupportedVersion(String),

    /// Negative search radius
    #[error("Invalid radius {0}: radius must be zero or positive")]
    InvalidRadius(i32),

    /// Mineral name that matches no known kind
    #[error("Unknown mineral type: {0:?}")]
    UnknownMineral(String),

    /// Broken generation rule (a programming error, not a runtime condition)
    #[error("Internal generation fault in {kind} rule: {reason}")]
    InternalGenerationFault {
        /// Mineral whose rule is broken
        kind: MineralKind,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type alias for finder operations.
pub type FinderResult<T> = Result<T, FinderError>;
