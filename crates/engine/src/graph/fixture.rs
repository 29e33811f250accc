//! JSON fixtures for seeding a [`PropertyGraph`].
//!
//! ```json
//! {
//!   "nodes": [
//!     {"id": 0, "labels": ["Movie"], "properties": {"title": "Heat", "year": 1995}},
//!     {"id": 1, "labels": ["Person"], "properties": {"name": "Al Pacino"}}
//!   ],
//!   "relationships": [
//!     {"source": 1, "type": "ACTED_IN", "target": 0}
//!   ]
//! }
//! ```

use std::path::Path;

use moviegraph_core::{GraphError, GraphResult, Node};
use serde::{Deserialize, Serialize};

use super::types::Relationship;
use super::PropertyGraph;

/// Serialized form of a graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphFixture {
    /// Nodes with explicit ids.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Relationships between those nodes.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl GraphFixture {
    /// Parse a fixture from JSON text.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::serialization(e.to_string()))
    }

    /// Read and parse a fixture file.
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GraphError::store_with_detail(format!("cannot read fixture {}", path.display()), e)
        })?;
        Self::from_json(&text)
    }
}

impl PropertyGraph {
    /// Build a graph from a fixture. Duplicate node ids and relationships
    /// with unknown endpoints are rejected.
    pub fn from_fixture(fixture: GraphFixture) -> GraphResult<Self> {
        let mut graph = PropertyGraph::new();
        for node in fixture.nodes {
            graph.insert_node(node)?;
        }
        for rel in &fixture.relationships {
            graph.add_relationship(rel.source, &rel.rel_type, rel.target)?;
        }
        tracing::info!(
            nodes = graph.node_count(),
            relationships = graph.relationship_count(),
            "Loaded graph fixture"
        );
        Ok(graph)
    }

    /// Load a fixture file into a new graph.
    pub fn load(path: &Path) -> GraphResult<Self> {
        Self::from_fixture(GraphFixture::from_path(path)?)
    }
}
