//! Command dispatch.

use std::sync::Arc;
use std::time::Instant;

use moviegraph_engine::GraphStore;

use crate::handlers;
use crate::{Command, Output, Result};

/// Runs [`Command`]s against a shared graph store.
///
/// Clone is cheap; clones share the store.
#[derive(Clone)]
pub struct Executor {
    store: Arc<dyn GraphStore>,
}

impl Executor {
    /// Create an executor over `store`.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn GraphStore> {
        &self.store
    }

    /// Execute a command.
    pub async fn execute(&self, command: Command) -> Result<Output> {
        let name = command.name();
        let started = Instant::now();
        let store = self.store.as_ref();
        let result = match command {
            Command::SearchMovies { title } => handlers::movies::search(store, title).await,
            Command::ListMovies => handlers::movies::list_all(store).await,
            Command::MovieDetail { movie_id } => handlers::movies::detail(store, movie_id).await,
            Command::SimilarMovies { movie_id } => {
                handlers::movies::similar(store, movie_id).await
            }
        };
        if let Err(e) = &result {
            tracing::debug!(
                command = name,
                kind = e.kind(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Command failed"
            );
        }
        result
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("backend", &self.store.backend())
            .finish()
    }
}
