//! In-process graph store.
//!
//! [`MemoryStore`] serves a [`PropertyGraph`] through the [`GraphStore`]
//! traits. Sessions share the graph by `Arc`; the graph is never mutated
//! after construction, so concurrent sessions need no coordination.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use moviegraph_core::{GraphError, GraphResult, Params, Record};
use parking_lot::RwLock;

use crate::graph::PropertyGraph;
use crate::query::Query;
use crate::store::{GraphSession, GraphStore, SessionGuard, SessionTracker};

/// Graph store backed by an in-memory [`PropertyGraph`].
///
/// Clone is not provided; share it as `Arc<MemoryStore>` or
/// `Arc<dyn GraphStore>`.
#[derive(Debug)]
pub struct MemoryStore {
    /// `None` once closed.
    graph: RwLock<Option<Arc<PropertyGraph>>>,
    tracker: SessionTracker,
}

impl MemoryStore {
    /// Serve `graph`.
    pub fn new(graph: PropertyGraph) -> Self {
        Self {
            graph: RwLock::new(Some(Arc::new(graph))),
            tracker: SessionTracker::new(),
        }
    }

    /// Load a JSON fixture and serve it.
    pub fn from_fixture(path: &Path) -> GraphResult<Self> {
        Ok(Self::new(PropertyGraph::load(path)?))
    }

    /// True once [`GraphStore::close`] has run.
    pub fn is_closed(&self) -> bool {
        self.graph.read().is_none()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn open_session(&self) -> GraphResult<Box<dyn GraphSession>> {
        let graph = self.graph.read().clone().ok_or(GraphError::Closed)?;
        Ok(Box::new(MemorySession {
            graph,
            _guard: self.tracker.acquire(),
        }))
    }

    async fn close(&self) -> GraphResult<()> {
        if self.graph.write().take().is_some() {
            tracing::info!(open_sessions = self.tracker.open(), "Memory store closed");
        }
        Ok(())
    }

    fn open_sessions(&self) -> usize {
        self.tracker.open()
    }
}

struct MemorySession {
    graph: Arc<PropertyGraph>,
    _guard: SessionGuard,
}

#[async_trait]
impl GraphSession for MemorySession {
    async fn run(&mut self, query: Query, params: &Params) -> GraphResult<Vec<Record>> {
        self.graph.evaluate(query, params)
    }
}
