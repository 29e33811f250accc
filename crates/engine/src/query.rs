//! Fixed query catalog.
//!
//! Every read the system performs is one of the [`Query`] variants. Query
//! text is compiled in; callers only ever supply parameter values, bound by
//! name, so user input cannot alter query structure.
//!
//! Node columns are projected as `{id, labels, properties}` maps so that any
//! backend returns them in the serde shape of [`moviegraph_core::Node`].

use std::fmt;

/// Parameter names used by the catalog.
pub mod params {
    /// Lower-cased substring matched against movie titles.
    pub const TITLE: &str = "title";
    /// Node id of the base movie.
    pub const MOVIE_ID: &str = "movie_id";
}

/// Result column names used by the catalog.
pub mod columns {
    /// Movie node id.
    pub const ID: &str = "id";
    /// Movie title.
    pub const TITLE: &str = "title";
    /// Movie release year.
    pub const YEAR: &str = "year";
    /// Movie rating.
    pub const RATING: &str = "rating";
    /// The base movie node.
    pub const MOVIE: &str = "movie";
    /// Distinct actors of the base movie.
    pub const ACTORS: &str = "actors";
    /// Distinct directors of the base movie.
    pub const DIRECTORS: &str = "directors";
    /// Distinct genres of the base movie.
    pub const GENRES: &str = "genres";
    /// Distinct movies sharing a genre with the base movie.
    pub const BY_GENRE: &str = "by_genre";
    /// Distinct movies sharing an actor with the base movie.
    pub const BY_CAST: &str = "by_cast";
}

/// Node labels and relationship types of the movie graph.
pub mod schema {
    /// Movie label.
    pub const MOVIE: &str = "Movie";
    /// Person label.
    pub const PERSON: &str = "Person";
    /// Genre label.
    pub const GENRE: &str = "Genre";
    /// Person → Movie.
    pub const ACTED_IN: &str = "ACTED_IN";
    /// Person → Movie.
    pub const DIRECTED: &str = "DIRECTED";
    /// Movie → Genre.
    pub const IN_GENRE: &str = "IN_GENRE";
}

/// What a result column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Scalar property value.
    Value,
    /// Single node.
    Node,
    /// List of nodes.
    Nodes,
}

/// A named result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: &'static str,
    /// Column kind.
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> Column {
    Column { name, kind }
}

const SUMMARY_COLUMNS: &[Column] = &[
    col(columns::ID, ColumnKind::Value),
    col(columns::TITLE, ColumnKind::Value),
    col(columns::YEAR, ColumnKind::Value),
    col(columns::RATING, ColumnKind::Value),
];

const DETAIL_COLUMNS: &[Column] = &[
    col(columns::MOVIE, ColumnKind::Node),
    col(columns::ACTORS, ColumnKind::Nodes),
    col(columns::DIRECTORS, ColumnKind::Nodes),
    col(columns::GENRES, ColumnKind::Nodes),
];

const SIMILAR_COLUMNS: &[Column] = &[
    col(columns::MOVIE, ColumnKind::Node),
    col(columns::BY_GENRE, ColumnKind::Nodes),
    col(columns::BY_CAST, ColumnKind::Nodes),
];

const SEARCH_BY_TITLE: &str = "\
MATCH (m:Movie)
WHERE toLower(m.title) CONTAINS toLower($title)
RETURN id(m) AS id, m.title AS title, m.year AS year, m.rating AS rating
ORDER BY m.title";

const LIST_ALL: &str = "\
MATCH (m:Movie)
RETURN id(m) AS id, m.title AS title, m.year AS year, m.rating AS rating
ORDER BY m.title";

const MOVIE_DETAIL: &str = "\
MATCH (m:Movie)
WHERE id(m) = $movie_id
OPTIONAL MATCH (m)<-[:ACTED_IN]-(a:Person)
WITH m, collect(DISTINCT a) AS actors
OPTIONAL MATCH (m)<-[:DIRECTED]-(d:Person)
WITH m, actors, collect(DISTINCT d) AS directors
OPTIONAL MATCH (m)-[:IN_GENRE]->(g:Genre)
WITH m, actors, directors, collect(DISTINCT g) AS genres
RETURN {id: id(m), labels: labels(m), properties: properties(m)} AS movie,
       [n IN actors | {id: id(n), labels: labels(n), properties: properties(n)}] AS actors,
       [n IN directors | {id: id(n), labels: labels(n), properties: properties(n)}] AS directors,
       [n IN genres | {id: id(n), labels: labels(n), properties: properties(n)}] AS genres";

const SIMILAR_CANDIDATES: &str = "\
MATCH (m:Movie)
WHERE id(m) = $movie_id
OPTIONAL MATCH (m)-[:IN_GENRE]->(:Genre)<-[:IN_GENRE]-(g:Movie)
WHERE id(g) <> id(m)
WITH m, collect(DISTINCT g) AS by_genre
OPTIONAL MATCH (m)<-[:ACTED_IN]-(:Person)-[:ACTED_IN]->(c:Movie)
WHERE id(c) <> id(m)
WITH m, by_genre, collect(DISTINCT c) AS by_cast
RETURN {id: id(m), labels: labels(m), properties: properties(m)} AS movie,
       [n IN by_genre | {id: id(n), labels: labels(n), properties: properties(n)}] AS by_genre,
       [n IN by_cast | {id: id(n), labels: labels(n), properties: properties(n)}] AS by_cast";

/// A read query from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Case-insensitive substring match on `Movie.title`, ordered by title.
    /// Params: `title`. Columns: `id, title, year, rating`.
    SearchByTitle,
    /// Every movie, ordered by title. Columns: `id, title, year, rating`.
    ListAll,
    /// The movie with a given id plus its distinct actors, directors and
    /// genres. Params: `movie_id`. At most one row; none if the id is absent.
    MovieDetail,
    /// The movie with a given id plus the distinct movies reachable through a
    /// shared genre and through a shared actor, base excluded. Params:
    /// `movie_id`. At most one row; none if the id is absent.
    SimilarCandidates,
}

impl Query {
    /// Every catalog entry.
    pub const ALL: [Query; 4] = [
        Query::SearchByTitle,
        Query::ListAll,
        Query::MovieDetail,
        Query::SimilarCandidates,
    ];

    /// Stable name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Query::SearchByTitle => "search_by_title",
            Query::ListAll => "list_all",
            Query::MovieDetail => "movie_detail",
            Query::SimilarCandidates => "similar_candidates",
        }
    }

    /// Cypher text.
    pub fn cypher(&self) -> &'static str {
        match self {
            Query::SearchByTitle => SEARCH_BY_TITLE,
            Query::ListAll => LIST_ALL,
            Query::MovieDetail => MOVIE_DETAIL,
            Query::SimilarCandidates => SIMILAR_CANDIDATES,
        }
    }

    /// Parameters that must be bound.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Query::SearchByTitle => &[params::TITLE],
            Query::ListAll => &[],
            Query::MovieDetail | Query::SimilarCandidates => &[params::MOVIE_ID],
        }
    }

    /// Result columns, in projection order.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Query::SearchByTitle | Query::ListAll => SUMMARY_COLUMNS,
            Query::MovieDetail => DETAIL_COLUMNS,
            Query::SimilarCandidates => SIMILAR_COLUMNS,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
