//! Movie query service for MovieGraph.
//!
//! Requests are expressed as [`Command`]s, dispatched by an [`Executor`] to
//! per-command handlers, and answered with an [`Output`]. [`MovieService`]
//! wraps the executor with one typed async method per operation:
//!
//! | Operation | Result |
//! |---|---|
//! | [`MovieService::search`] | title-ordered summaries, `[]` for a blank fragment |
//! | [`MovieService::list_all`] | every movie, title-ordered |
//! | [`MovieService::detail`] | movie, actors, directors, genres; or [`Error::NotFound`] |
//! | [`MovieService::similar`] | union of genre and cast neighbours, ranked; or [`Error::NotFound`] |

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
pub mod handlers;
pub mod mapper;
mod output;
pub mod similarity;
pub mod types;

pub use api::MovieService;
pub use command::Command;
pub use convert::convert_result;
pub use error::{Error, Result};
pub use executor::Executor;
pub use handlers::movies::parse_movie_id;
pub use output::Output;
pub use types::{MovieDetail, MovieSummary, NodeView};
