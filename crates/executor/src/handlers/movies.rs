//! Movie command handlers.

use std::num::IntErrorKind;

use moviegraph_core::{NodeId, Params};
use moviegraph_engine::query::{columns, params};
use moviegraph_engine::{run_query, GraphStore, Query};

use crate::convert::convert_result;
use crate::mapper::{detail_from_record, summary_from_record};
use crate::similarity::rank_similar;
use crate::{Error, Output, Result};

/// Parse a movie id from a path segment.
///
/// Only the canonical decimal form is accepted; a leading `+` is rejected so
/// each movie has one URL.
pub fn parse_movie_id(raw: &str) -> Result<NodeId> {
    let invalid = |detail: &str| Error::Validation {
        reason: format!("Invalid movie id '{}'. {}", raw, detail),
    };
    if raw.starts_with('+') {
        return Err(invalid("Must be an integer."));
    }
    raw.parse::<NodeId>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => invalid("Integer out of range."),
        _ => invalid("Must be an integer."),
    })
}

/// Handle SearchMovies command.
///
/// A blank fragment returns no results without touching the store.
pub async fn search(store: &dyn GraphStore, title: Option<String>) -> Result<Output> {
    let fragment = title.as_deref().map(str::trim).unwrap_or_default();
    if fragment.is_empty() {
        return Ok(Output::Movies(Vec::new()));
    }
    let args = Params::new().with(params::TITLE, fragment);
    let records = convert_result(run_query(store, Query::SearchByTitle, args).await)?;
    let movies = records
        .iter()
        .map(summary_from_record)
        .collect::<Result<Vec<_>>>()?;
    Ok(Output::Movies(movies))
}

/// Handle ListMovies command.
pub async fn list_all(store: &dyn GraphStore) -> Result<Output> {
    let records = convert_result(run_query(store, Query::ListAll, Params::new()).await)?;
    let movies = records
        .iter()
        .map(summary_from_record)
        .collect::<Result<Vec<_>>>()?;
    Ok(Output::Movies(movies))
}

/// Handle MovieDetail command.
pub async fn detail(store: &dyn GraphStore, movie_id: NodeId) -> Result<Output> {
    let args = Params::new().with(params::MOVIE_ID, movie_id);
    let records = convert_result(run_query(store, Query::MovieDetail, args).await)?;
    let record = records
        .into_iter()
        .next()
        .ok_or(Error::NotFound { movie_id })?;
    Ok(Output::Detail(Box::new(detail_from_record(record)?)))
}

/// Handle SimilarMovies command.
pub async fn similar(store: &dyn GraphStore, movie_id: NodeId) -> Result<Output> {
    let args = Params::new().with(params::MOVIE_ID, movie_id);
    let records = convert_result(run_query(store, Query::SimilarCandidates, args).await)?;
    let record = records
        .into_iter()
        .next()
        .ok_or(Error::NotFound { movie_id })?;
    let by_genre = record.nodes(columns::BY_GENRE)?;
    let by_cast = record.nodes(columns::BY_CAST)?;
    let movies = rank_similar(movie_id, by_genre, by_cast);
    tracing::debug!(
        movie_id,
        by_genre = by_genre.len(),
        by_cast = by_cast.len(),
        similar = movies.len(),
        "Ranked similar movies"
    );
    Ok(Output::Movies(movies))
}
