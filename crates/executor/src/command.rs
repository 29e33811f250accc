//! Commands accepted by the [`Executor`](crate::Executor).

use moviegraph_core::NodeId;

/// A read request against the movie graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Case-insensitive title substring search. A missing or blank title
    /// yields no results.
    SearchMovies {
        /// Title fragment as supplied by the caller.
        title: Option<String>,
    },
    /// Every movie, by title.
    ListMovies,
    /// A movie with its cast, directors and genres.
    MovieDetail {
        /// Movie node id.
        movie_id: NodeId,
    },
    /// Movies sharing a genre or an actor with the given movie.
    SimilarMovies {
        /// Movie node id.
        movie_id: NodeId,
    },
}

impl Command {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SearchMovies { .. } => "SearchMovies",
            Command::ListMovies => "ListMovies",
            Command::MovieDetail { .. } => "MovieDetail",
            Command::SimilarMovies { .. } => "SimilarMovies",
        }
    }
}
