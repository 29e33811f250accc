//! MovieGraph: a read-only query service over a movie knowledge graph.
//!
//! ```no_run
//! # async fn demo() -> moviegraph::Result<()> {
//! let movies = moviegraph::open_fixture("fixtures/movies.json")?;
//! let heat = movies.search(Some("heat")).await?;
//! let similar = movies.similar(heat[0].id).await?;
//! # let _ = similar;
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP surface lives in the `moviegraph-server` crate.

pub mod types;

use std::path::Path;
use std::sync::Arc;

pub use moviegraph_engine::{GraphSession, GraphStore, MemoryStore, PropertyGraph, Query};
#[cfg(feature = "neo4j")]
pub use moviegraph_engine::{Neo4jConfig, Neo4jStore};
pub use moviegraph_executor::MovieService;
pub use types::*;

/// A service over an in-memory graph.
pub fn in_memory(graph: PropertyGraph) -> MovieService {
    MovieService::new(Arc::new(MemoryStore::new(graph)))
}

/// A service over a graph loaded from a JSON fixture file.
pub fn open_fixture(path: impl AsRef<Path>) -> Result<MovieService> {
    let store = moviegraph_executor::convert_result(MemoryStore::from_fixture(path.as_ref()))?;
    Ok(MovieService::new(Arc::new(store)))
}

/// A service over a Neo4j server.
#[cfg(feature = "neo4j")]
pub async fn connect_neo4j(config: &Neo4jConfig) -> Result<MovieService> {
    let store = moviegraph_executor::convert_result(Neo4jStore::connect(config).await)?;
    Ok(MovieService::new(Arc::new(store)))
}
