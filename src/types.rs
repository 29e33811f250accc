//! Public types for the MovieGraph API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Graph values
// ============================================================================

pub use moviegraph_core::{Field, Node, NodeId, Params, Record, Value};

// ============================================================================
// Responses
// ============================================================================

pub use moviegraph_executor::{MovieDetail, MovieSummary, NodeView};

// ============================================================================
// Errors
// ============================================================================

pub use moviegraph_core::{GraphError, GraphResult};
pub use moviegraph_executor::{Error, Result};
