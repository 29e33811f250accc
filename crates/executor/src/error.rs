//! Executor error type.
//!
//! Every failure the movie service can surface is one of these variants.
//! The HTTP layer maps them to status codes through [`Error::kind`].

use moviegraph_core::NodeId;

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the movie service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed caller input, rejected before any store call.
    #[error("invalid input: {reason}")]
    Validation {
        /// What was wrong with the input.
        reason: String,
    },

    /// No Movie node has this id.
    #[error("movie {movie_id} not found")]
    NotFound {
        /// The id that was looked up.
        movie_id: NodeId,
    },

    /// The graph store failed or is unavailable. Never retried.
    #[error("graph store error: {reason}")]
    Store {
        /// Store failure description.
        reason: String,
    },

    /// A record did not have the expected shape.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the mismatch.
        reason: String,
    },

    /// A command produced an output of the wrong kind.
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the inconsistency.
        reason: String,
    },
}

impl Error {
    /// Stable machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "validation",
            Error::NotFound { .. } => "not_found",
            Error::Store { .. } => "store",
            Error::Serialization { .. } => "serialization",
            Error::Internal { .. } => "internal",
        }
    }
}
