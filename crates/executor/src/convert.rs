//! Error conversion from graph store errors.
//!
//! This module maps [`GraphError`] onto the executor's [`Error`] type.

use moviegraph_core::{GraphError, GraphResult};

use crate::{Error, Result};

/// Convert a GraphError to an executor Error.
///
/// Store-side failures keep their full message, including any driver
/// detail, so the HTTP layer can log them.
impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidInput { message } => Error::Validation { reason: message },

            GraphError::Store { .. } | GraphError::Closed => Error::Store {
                reason: err.to_string(),
            },

            GraphError::Serialization { .. }
            | GraphError::MissingField { .. }
            | GraphError::WrongFieldType { .. } => Error::Serialization {
                reason: err.to_string(),
            },
        }
    }
}

/// Convert a store result into an executor result.
pub fn convert_result<T>(result: GraphResult<T>) -> Result<T> {
    result.map_err(Error::from)
}
