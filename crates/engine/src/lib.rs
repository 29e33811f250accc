//! Graph store layer for MovieGraph.
//!
//! - [`query`]: the fixed, parameterized query catalog
//! - [`store`]: the store/session traits and the scoped [`run_query`] helper
//! - [`graph`]: an in-memory property graph that evaluates the catalog
//! - [`memory`]: [`MemoryStore`], the in-process [`GraphStore`]
//! - `neo4j` (feature `neo4j`): a Bolt-backed [`GraphStore`]

pub mod graph;
pub mod memory;
#[cfg(feature = "neo4j")]
pub mod neo4j;
pub mod query;
pub mod store;

pub use graph::PropertyGraph;
pub use memory::MemoryStore;
#[cfg(feature = "neo4j")]
pub use neo4j::{Neo4jConfig, Neo4jStore};
pub use query::Query;
pub use store::{run_query, GraphSession, GraphStore, SessionGuard, SessionTracker};
