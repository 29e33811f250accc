//! Route handlers.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use moviegraph_executor::{parse_movie_id, MovieDetail, MovieSummary};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const APP_JS: &str = include_str!("../assets/app.js");

/// Query string of `GET /api/movies`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Title fragment. Missing or blank returns `[]`.
    pub title: Option<String>,
}

/// `GET /api/movies?title=...`
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MovieSummary>>, ApiError> {
    let movies = state.service.search(params.title.as_deref()).await?;
    Ok(Json(movies))
}

/// `GET /api/movies/all`
pub async fn all_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieSummary>>, ApiError> {
    Ok(Json(state.service.list_all().await?))
}

/// `GET /api/movies/:id`
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieDetail>, ApiError> {
    let movie_id = parse_movie_id(&id)?;
    Ok(Json(state.service.detail(movie_id).await?))
}

/// `GET /api/movies/:id/similar`
pub async fn similar_movies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MovieSummary>>, ApiError> {
    let movie_id = parse_movie_id(&id)?;
    Ok(Json(state.service.similar(movie_id).await?))
}

/// `GET /health`. Does not touch the store.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "backend": state.service.backend(),
    }))
}

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /static/app.js`
pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}
