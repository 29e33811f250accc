//! Core types for MovieGraph.
//!
//! This crate defines the data shapes shared by every layer:
//! - [`Value`]: tagged property value stored on graph nodes
//! - [`Node`]: a graph node with id, labels and a dynamic property map
//! - [`Record`] / [`Field`]: one row of a query result
//! - [`Params`]: named query parameters
//! - [`GraphError`] / [`GraphResult`]: errors raised by graph stores

#![warn(missing_docs)]

pub mod error;
pub mod node;
pub mod record;
pub mod value;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
pub use record::{Field, Params, Record};
pub use value::Value;
