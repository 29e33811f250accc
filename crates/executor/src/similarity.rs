//! Similar-movie ranking.
//!
//! Candidates arrive as two node lists, one per path (shared genre, shared
//! cast). The result is their union, each movie once, without the base
//! movie, ordered by rating descending with missing ratings last, then by
//! title ascending with missing titles last, then by id.

use std::cmp::Ordering;

use moviegraph_core::{Node, NodeId};
use rustc_hash::FxHashSet;

use crate::mapper::summary_from_node;
use crate::types::MovieSummary;

/// Union, deduplicate and rank similarity candidates.
pub fn rank_similar(base: NodeId, by_genre: &[Node], by_cast: &[Node]) -> Vec<MovieSummary> {
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    seen.insert(base);
    let mut movies: Vec<MovieSummary> = by_genre
        .iter()
        .chain(by_cast)
        .filter(|n| seen.insert(n.id))
        .map(summary_from_node)
        .collect();
    movies.sort_by(compare_similar);
    movies
}

/// Ordering of similar movies.
pub fn compare_similar(a: &MovieSummary, b: &MovieSummary) -> Ordering {
    let by_rating = match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    let by_title = match (&a.title, &b.title) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_rating.then(by_title).then(a.id.cmp(&b.id))
}
