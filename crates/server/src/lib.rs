//! HTTP surface for MovieGraph.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /api/movies?title=` | `[{id, title, year, rating}]` |
//! | `GET /api/movies/all` | `[{id, title, year, rating}]` |
//! | `GET /api/movies/:id` | `{movie, actors, directors, genres}` |
//! | `GET /api/movies/:id/similar` | `[{id, title, year, rating}]` |
//! | `GET /health` | `{status, backend}` |
//! | `GET /` | landing page |

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod startup;

pub use app::{build_router, AppState};
pub use config::{AppConfig, Backend, ConfigError};
pub use error::ApiError;
pub use startup::{connect_store, run, serve, shutdown_signal, StartupError};
