//! In-memory property graph.
//!
//! Nodes carry integer ids, labels and a property map; relationships are
//! typed and directed and live in an [`AdjacencyIndex`]. The graph is built
//! once (programmatically or from a JSON fixture) and then only read, so it
//! is shared behind an `Arc` without locking.

pub mod adjacency;
pub mod eval;
pub mod fixture;
pub mod traversal;
pub mod types;

use std::collections::BTreeMap;

use moviegraph_core::{GraphError, GraphResult, Node, NodeId, Value};

use adjacency::AdjacencyIndex;

/// Property graph held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct PropertyGraph {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: AdjacencyIndex,
    next_id: NodeId,
}

impl PropertyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Add a node with a fresh id and return the id.
    pub fn add_node<I, K>(&mut self, labels: &[&str], properties: I) -> NodeId
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let id = self.next_id;
        self.next_id += 1;
        let node = Node {
            id,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        };
        self.nodes.insert(id, node);
        id
    }

    /// Insert a node with an explicit id. Fails if the id is taken.
    pub fn insert_node(&mut self, node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::invalid_input(format!(
                "duplicate node id {}",
                node.id
            )));
        }
        self.next_id = self.next_id.max(node.id.saturating_add(1));
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Add a directed relationship. Adding an existing relationship is a
    /// no-op.
    pub fn add_relationship(
        &mut self,
        src: NodeId,
        rel_type: &str,
        dst: NodeId,
    ) -> GraphResult<()> {
        validate_rel_type(rel_type)?;
        for id in [src, dst] {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::invalid_input(format!(
                    "relationship {} references unknown node {}",
                    rel_type, id
                )));
            }
        }
        self.adjacency.add_edge(src, dst, rel_type);
        Ok(())
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Nodes carrying `label`, in id order.
    pub fn nodes_with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.values().filter(move |n| n.has_label(label))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub(crate) fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }
}

/// Validate a relationship type.
pub fn validate_rel_type(t: &str) -> GraphResult<()> {
    if t.is_empty() {
        return Err(GraphError::invalid_input(
            "Relationship type must not be empty",
        ));
    }
    if t.chars().any(char::is_whitespace) {
        return Err(GraphError::invalid_input(
            "Relationship type must not contain whitespace",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(title: &str) -> Vec<(&'static str, Value)> {
        vec![("title", Value::from(title))]
    }

    #[test]
    fn add_node_assigns_sequential_ids() {
        let mut g = PropertyGraph::new();
        let a = g.add_node(&["Movie"], props("A"));
        let b = g.add_node(&["Movie"], props("B"));
        assert_eq!(b, a + 1);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node(a).unwrap().property("title").as_str(), Some("A"));
    }

    #[test]
    fn insert_node_rejects_duplicate_id() {
        let mut g = PropertyGraph::new();
        g.insert_node(Node::new(5)).unwrap();
        assert!(g.insert_node(Node::new(5)).is_err());
    }

    #[test]
    fn insert_node_advances_next_id() {
        let mut g = PropertyGraph::new();
        g.insert_node(Node::new(41)).unwrap();
        let id = g.add_node(&["Genre"], Vec::<(&str, Value)>::new());
        assert_eq!(id, 42);
    }

    #[test]
    fn relationship_requires_existing_endpoints() {
        let mut g = PropertyGraph::new();
        let m = g.add_node(&["Movie"], props("A"));
        let err = g.add_relationship(99, "ACTED_IN", m).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));
        assert_eq!(g.relationship_count(), 0);
    }

    #[test]
    fn relationship_type_is_validated() {
        let mut g = PropertyGraph::new();
        let a = g.add_node(&["Person"], Vec::<(&str, Value)>::new());
        let m = g.add_node(&["Movie"], props("A"));
        assert!(g.add_relationship(a, "", m).is_err());
        assert!(g.add_relationship(a, "ACTED IN", m).is_err());
        assert!(g.add_relationship(a, "ACTED_IN", m).is_ok());
    }

    #[test]
    fn nodes_with_label_filters() {
        let mut g = PropertyGraph::new();
        g.add_node(&["Movie"], props("A"));
        g.add_node(&["Person"], Vec::<(&str, Value)>::new());
        g.add_node(&["Movie"], props("B"));
        assert_eq!(g.nodes_with_label("Movie").count(), 2);
        assert_eq!(g.nodes_with_label("Genre").count(), 0);
    }
}
