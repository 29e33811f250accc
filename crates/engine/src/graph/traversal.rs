//! Graph traversal operations: neighbors, label-filtered hops, two-hop
//! pattern expansion.

use moviegraph_core::{Node, NodeId};
use rustc_hash::FxHashSet;

use super::types::*;
use super::PropertyGraph;

impl PropertyGraph {
    /// Get neighbors of a node in a given direction, optionally filtered by
    /// relationship type.
    pub fn neighbors(
        &self,
        node_id: NodeId,
        direction: Direction,
        rel_type_filter: Option<&str>,
    ) -> Vec<Neighbor> {
        let adj = self.adjacency();
        match direction {
            Direction::Outgoing => adj.outgoing_neighbors(node_id, rel_type_filter),
            Direction::Incoming => adj.incoming_neighbors(node_id, rel_type_filter),
            Direction::Both => {
                let mut out = adj.outgoing_neighbors(node_id, rel_type_filter);
                out.extend(adj.incoming_neighbors(node_id, rel_type_filter));
                out
            }
        }
    }

    /// Distinct nodes one hop away, in discovery order.
    ///
    /// An empty result means nothing matched; the start node need not exist.
    pub fn hop(&self, start: NodeId, hop: Hop<'_>) -> Vec<&Node> {
        let mut seen: FxHashSet<NodeId> = FxHashSet::default();
        self.neighbors(start, hop.direction, Some(hop.rel_type))
            .into_iter()
            .filter_map(|n| self.node(n.node_id))
            .filter(|node| node.has_label(hop.label))
            .filter(|node| seen.insert(node.id))
            .collect()
    }

    /// Distinct nodes reached by `first` then `second`, excluding `start`
    /// itself, in discovery order.
    pub fn two_hop(&self, start: NodeId, first: Hop<'_>, second: Hop<'_>) -> Vec<&Node> {
        let mut seen: FxHashSet<NodeId> = FxHashSet::default();
        seen.insert(start);
        let mut out = Vec::new();
        for middle in self.hop(start, first) {
            for node in self.hop(middle.id, second) {
                if seen.insert(node.id) {
                    out.push(node);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviegraph_core::Value;

    fn ids(nodes: &[&Node]) -> Vec<NodeId> {
        nodes.iter().map(|n| n.id).collect()
    }

    fn empty() -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    // Two movies sharing one actor and one genre; a third sharing the genre.
    fn setup() -> (PropertyGraph, [NodeId; 5]) {
        let mut g = PropertyGraph::new();
        let m1 = g.add_node(&["Movie"], empty());
        let m2 = g.add_node(&["Movie"], empty());
        let m3 = g.add_node(&["Movie"], empty());
        let actor = g.add_node(&["Person"], empty());
        let drama = g.add_node(&["Genre"], empty());
        g.add_relationship(actor, "ACTED_IN", m1).unwrap();
        g.add_relationship(actor, "ACTED_IN", m2).unwrap();
        for m in [m1, m2, m3] {
            g.add_relationship(m, "IN_GENRE", drama).unwrap();
        }
        (g, [m1, m2, m3, actor, drama])
    }

    // =========================================================================
    // Neighbors
    // =========================================================================

    #[test]
    fn node_without_edges_has_no_neighbors() {
        let mut g = PropertyGraph::new();
        let a = g.add_node(&["Movie"], empty());
        assert!(g.neighbors(a, Direction::Outgoing, None).is_empty());
        assert!(g.neighbors(a, Direction::Both, None).is_empty());
    }

    #[test]
    fn both_directions_combine() {
        let (g, [m1, _, _, actor, drama]) = setup();
        let n = g.neighbors(m1, Direction::Both, None);
        let mut found: Vec<_> = n.iter().map(|n| n.node_id).collect();
        found.sort();
        assert_eq!(found, vec![actor, drama]);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let (g, _) = setup();
        assert!(g.neighbors(999, Direction::Both, None).is_empty());
    }

    // =========================================================================
    // Hops
    // =========================================================================

    #[test]
    fn hop_filters_by_label() {
        let (g, [m1, _, _, actor, _]) = setup();
        let people = g.hop(m1, Hop::incoming("ACTED_IN", "Person"));
        assert_eq!(ids(&people), vec![actor]);
        let genres_as_people = g.hop(m1, Hop::outgoing("IN_GENRE", "Person"));
        assert!(genres_as_people.is_empty());
    }

    #[test]
    fn two_hop_excludes_start_and_dedups() {
        let (g, [m1, m2, m3, _, _]) = setup();
        let by_genre = g.two_hop(
            m1,
            Hop::outgoing("IN_GENRE", "Genre"),
            Hop::incoming("IN_GENRE", "Movie"),
        );
        assert_eq!(ids(&by_genre), vec![m2, m3]);

        let by_cast = g.two_hop(
            m1,
            Hop::incoming("ACTED_IN", "Person"),
            Hop::outgoing("ACTED_IN", "Movie"),
        );
        assert_eq!(ids(&by_cast), vec![m2]);
    }

    #[test]
    fn two_hop_through_several_middles_counts_once() {
        let (mut g, [m1, m2, _, _, _]) = setup();
        let second_actor = g.add_node(&["Person"], empty());
        g.add_relationship(second_actor, "ACTED_IN", m1).unwrap();
        g.add_relationship(second_actor, "ACTED_IN", m2).unwrap();
        let by_cast = g.two_hop(
            m1,
            Hop::incoming("ACTED_IN", "Person"),
            Hop::outgoing("ACTED_IN", "Movie"),
        );
        assert_eq!(ids(&by_cast), vec![m2]);
    }
}
