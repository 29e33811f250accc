//! Catalog query evaluation against a [`PropertyGraph`].
//!
//! Each [`Query`] is evaluated with the same observable semantics as its
//! Cypher text: optional traversals never drop the base row, collections are
//! distinct by node identity, and title ordering puts missing titles last.

use moviegraph_core::{GraphResult, Node, Params, Record, Value};

use super::types::Hop;
use super::PropertyGraph;
use crate::query::{columns, params, schema, Query};

impl PropertyGraph {
    /// Evaluate a catalog query.
    pub fn evaluate(&self, query: Query, args: &Params) -> GraphResult<Vec<Record>> {
        match query {
            Query::SearchByTitle => {
                let needle = args.require_str(params::TITLE)?.to_lowercase();
                Ok(self.movie_summaries(|m| {
                    m.property("title")
                        .as_str()
                        .map_or(false, |t| t.to_lowercase().contains(&needle))
                }))
            }
            Query::ListAll => Ok(self.movie_summaries(|_| true)),
            Query::MovieDetail => {
                let id = args.require_i64(params::MOVIE_ID)?;
                Ok(self.movie(id).map(|m| self.detail_record(m)).into_iter().collect())
            }
            Query::SimilarCandidates => {
                let id = args.require_i64(params::MOVIE_ID)?;
                Ok(self
                    .movie(id)
                    .map(|m| self.similar_record(m))
                    .into_iter()
                    .collect())
            }
        }
    }

    fn movie(&self, id: i64) -> Option<&Node> {
        self.node(id).filter(|n| n.has_label(schema::MOVIE))
    }

    fn movie_summaries(&self, keep: impl Fn(&Node) -> bool) -> Vec<Record> {
        let mut movies: Vec<&Node> = self
            .nodes_with_label(schema::MOVIE)
            .filter(|m| keep(m))
            .collect();
        movies.sort_by(|a, b| {
            a.property("title")
                .order_ascending(b.property("title"))
                .then(a.id.cmp(&b.id))
        });
        movies
            .into_iter()
            .map(|m| {
                Record::new()
                    .with(columns::ID, Value::Int(m.id))
                    .with(columns::TITLE, m.property("title").clone())
                    .with(columns::YEAR, m.property("year").clone())
                    .with(columns::RATING, m.property("rating").clone())
            })
            .collect()
    }

    fn detail_record(&self, movie: &Node) -> Record {
        let actors = self.hop(movie.id, Hop::incoming(schema::ACTED_IN, schema::PERSON));
        let directors = self.hop(movie.id, Hop::incoming(schema::DIRECTED, schema::PERSON));
        let genres = self.hop(movie.id, Hop::outgoing(schema::IN_GENRE, schema::GENRE));
        Record::new()
            .with(columns::MOVIE, movie.clone())
            .with(columns::ACTORS, owned(actors))
            .with(columns::DIRECTORS, owned(directors))
            .with(columns::GENRES, owned(genres))
    }

    fn similar_record(&self, movie: &Node) -> Record {
        let by_genre = self.two_hop(
            movie.id,
            Hop::outgoing(schema::IN_GENRE, schema::GENRE),
            Hop::incoming(schema::IN_GENRE, schema::MOVIE),
        );
        let by_cast = self.two_hop(
            movie.id,
            Hop::incoming(schema::ACTED_IN, schema::PERSON),
            Hop::outgoing(schema::ACTED_IN, schema::MOVIE),
        );
        Record::new()
            .with(columns::MOVIE, movie.clone())
            .with(columns::BY_GENRE, owned(by_genre))
            .with(columns::BY_CAST, owned(by_cast))
    }
}

fn owned(nodes: Vec<&Node>) -> Vec<Node> {
    nodes.into_iter().cloned().collect()
}
