//! Router assembly.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use moviegraph_engine::GraphStore;
use moviegraph_executor::MovieService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::routes;

/// Shared request state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Movie query service.
    pub service: MovieService,
}

impl AppState {
    /// State over `store`.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            service: MovieService::new(store),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/movies", get(routes::search_movies))
        .route("/movies/all", get(routes::all_movies))
        .route("/movies/:id", get(routes::movie_detail))
        .route("/movies/:id/similar", get(routes::similar_movies));

    let mut app = Router::new()
        .route("/", get(routes::index))
        .route("/static/app.js", get(routes::app_js))
        .route("/health", get(routes::health))
        .nest("/api", api_routes)
        .with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}
