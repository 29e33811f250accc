//! Error type for graph store operations.

use thiserror::Error;

/// Result alias used by graph stores and record accessors.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while reading from a graph store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    /// Caller supplied input the store cannot accept.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable description.
        message: String,
    },

    /// The store could not be reached or failed to execute a query.
    #[error("store error: {message}{}", detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Store {
        /// What the store was doing when it failed.
        message: String,
        /// Underlying driver message, if any.
        detail: Option<String>,
    },

    /// The store has been shut down.
    #[error("graph store is closed")]
    Closed,

    /// A value could not be encoded or decoded.
    #[error("serialization error: {message}")]
    Serialization {
        /// Human-readable description.
        message: String,
    },

    /// A record did not contain a field the caller expected.
    #[error("record has no field '{field}'")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// A record field held a different kind of value than expected.
    #[error("field '{field}' is {actual}, expected {expected}")]
    WrongFieldType {
        /// Field name.
        field: String,
        /// Expected kind.
        expected: &'static str,
        /// Kind found.
        actual: &'static str,
    },
}

impl GraphError {
    /// Create an [`GraphError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a [`GraphError::Store`] without driver detail.
    pub fn store(message: impl Into<String>) -> Self {
        GraphError::Store {
            message: message.into(),
            detail: None,
        }
    }

    /// Create a [`GraphError::Store`] carrying the driver's message.
    pub fn store_with_detail(message: impl Into<String>, detail: impl ToString) -> Self {
        GraphError::Store {
            message: message.into(),
            detail: Some(detail.to_string()),
        }
    }

    /// Create a [`GraphError::Serialization`].
    pub fn serialization(message: impl Into<String>) -> Self {
        GraphError::Serialization {
            message: message.into(),
        }
    }

    /// Create a [`GraphError::MissingField`].
    pub fn missing_field(field: impl Into<String>) -> Self {
        GraphError::MissingField {
            field: field.into(),
        }
    }

    /// True for failures of the store itself (unreachable or closed).
    pub fn is_store_failure(&self) -> bool {
        matches!(self, GraphError::Store { .. } | GraphError::Closed)
    }
}
