//! Core graph types for the in-memory property graph.

use moviegraph_core::NodeId;
use serde::{Deserialize, Serialize};

/// Direction for traversal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (src → dst).
    Outgoing,
    /// Follow incoming edges (dst → src).
    Incoming,
    /// Follow edges in both directions.
    Both,
}

/// A neighbor entry returned by neighbor queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// The neighbor node ID.
    pub node_id: NodeId,
    /// The relationship type connecting to this neighbor.
    pub rel_type: String,
}

/// A typed, directed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Source node ID.
    pub source: NodeId,
    /// Relationship type, e.g. `ACTED_IN`.
    #[serde(rename = "type")]
    pub rel_type: String,
    /// Target node ID.
    pub target: NodeId,
}

/// One hop of a traversal pattern: follow `rel_type` in `direction` and keep
/// only neighbors carrying `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'a> {
    /// Edge direction relative to the current node.
    pub direction: Direction,
    /// Relationship type to follow.
    pub rel_type: &'a str,
    /// Required label on the reached node.
    pub label: &'a str,
}

impl<'a> Hop<'a> {
    /// Follow an outgoing relationship.
    pub fn outgoing(rel_type: &'a str, label: &'a str) -> Self {
        Self {
            direction: Direction::Outgoing,
            rel_type,
            label,
        }
    }

    /// Follow an incoming relationship.
    pub fn incoming(rel_type: &'a str, label: &'a str) -> Self {
        Self {
            direction: Direction::Incoming,
            rel_type,
            label,
        }
    }
}
