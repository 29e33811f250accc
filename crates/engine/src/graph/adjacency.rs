//! In-memory adjacency index for fast graph traversals.
//!
//! Forward and reverse adjacency lists are kept side by side so that both
//! outgoing and incoming neighbor lookups are O(1) per node.

use moviegraph_core::NodeId;
use rustc_hash::FxHashMap;

use super::types::Neighbor;

/// In-memory adjacency index for a single graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Forward adjacency: src → [(dst, rel_type)]
    outgoing: FxHashMap<NodeId, Vec<(NodeId, String)>>,
    /// Reverse adjacency: dst → [(src, rel_type)]
    incoming: FxHashMap<NodeId, Vec<(NodeId, String)>>,
    edge_count: usize,
}

impl AdjacencyIndex {
    /// Create a new empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge to the index. Returns false if the same (src, type, dst)
    /// edge is already present; the index is left unchanged in that case.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, rel_type: &str) -> bool {
        if self.contains_edge(src, dst, rel_type) {
            return false;
        }
        self.outgoing
            .entry(src)
            .or_default()
            .push((dst, rel_type.to_string()));
        self.incoming
            .entry(dst)
            .or_default()
            .push((src, rel_type.to_string()));
        self.edge_count += 1;
        true
    }

    /// True if the edge exists.
    pub fn contains_edge(&self, src: NodeId, dst: NodeId, rel_type: &str) -> bool {
        self.outgoing
            .get(&src)
            .map_or(false, |edges| {
                edges.iter().any(|(d, rt)| *d == dst && rt == rel_type)
            })
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get outgoing neighbors, optionally filtered by relationship type.
    pub fn outgoing_neighbors(
        &self,
        node_id: NodeId,
        rel_type_filter: Option<&str>,
    ) -> Vec<Neighbor> {
        Self::collect(self.outgoing.get(&node_id), rel_type_filter)
    }

    /// Get incoming neighbors, optionally filtered by relationship type.
    pub fn incoming_neighbors(
        &self,
        node_id: NodeId,
        rel_type_filter: Option<&str>,
    ) -> Vec<Neighbor> {
        Self::collect(self.incoming.get(&node_id), rel_type_filter)
    }

    fn collect(
        edges: Option<&Vec<(NodeId, String)>>,
        rel_type_filter: Option<&str>,
    ) -> Vec<Neighbor> {
        edges
            .map(|edges| {
                edges
                    .iter()
                    .filter(|(_, rt)| rel_type_filter.map_or(true, |f| rt == f))
                    .map(|(id, rt)| Neighbor {
                        node_id: *id,
                        rel_type: rt.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
