//! Results produced by the [`Executor`](crate::Executor).

use serde::Serialize;

use crate::types::{MovieDetail, MovieSummary};

/// Output of a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Ordered movie summaries.
    Movies(Vec<MovieSummary>),
    /// A single movie with its related nodes.
    Detail(Box<MovieDetail>),
}
