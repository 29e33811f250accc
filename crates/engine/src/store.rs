//! Graph store abstraction.
//!
//! A [`GraphStore`] is the process-wide session factory, created once at
//! startup and closed at shutdown. Each query runs inside its own
//! [`GraphSession`]; [`run_query`] acquires the session, runs the query and
//! drops the session on every exit path.
//!
//! Implementations must be safe to share across concurrent requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use moviegraph_core::{GraphError, GraphResult, Params, Record};

use crate::query::Query;

/// Session factory over a graph data store.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Short backend name (`"memory"`, `"neo4j"`).
    fn backend(&self) -> &'static str;

    /// Acquire a read session.
    async fn open_session(&self) -> GraphResult<Box<dyn GraphSession>>;

    /// Release the store. Later calls to [`GraphStore::open_session`] fail
    /// with [`GraphError::Closed`].
    async fn close(&self) -> GraphResult<()>;

    /// Number of sessions currently held.
    fn open_sessions(&self) -> usize;
}

/// A scoped read session. Dropping it releases the session.
#[async_trait]
pub trait GraphSession: Send {
    /// Run a catalog query and collect every record.
    async fn run(&mut self, query: Query, params: &Params) -> GraphResult<Vec<Record>>;
}

/// Run `query` in a fresh session.
///
/// Parameters are checked against the catalog before a session is opened.
/// The session is dropped before this returns, whether the query succeeded
/// or not.
pub async fn run_query(
    store: &dyn GraphStore,
    query: Query,
    params: Params,
) -> GraphResult<Vec<Record>> {
    for name in query.parameters() {
        if params.get(name).is_none() {
            return Err(GraphError::invalid_input(format!(
                "query '{}' requires parameter '{}'",
                query, name
            )));
        }
    }

    let started = Instant::now();
    let result = {
        let mut session = store.open_session().await?;
        session.run(query, &params).await
    };
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &result {
        Ok(records) => tracing::debug!(
            query = query.name(),
            backend = store.backend(),
            params = params.len(),
            rows = records.len(),
            elapsed_ms,
            "Query completed"
        ),
        Err(e) => tracing::warn!(
            query = query.name(),
            backend = store.backend(),
            error = %e,
            elapsed_ms,
            "Query failed"
        ),
    }
    result
}

/// Counts open sessions across a store.
///
/// Clone is cheap; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    open: Arc<AtomicUsize>,
}

impl SessionTracker {
    /// Create a tracker with no open sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session as open until the returned guard drops.
    pub fn acquire(&self) -> SessionGuard {
        self.open.fetch_add(1, Ordering::SeqCst);
        SessionGuard {
            open: Arc::clone(&self.open),
        }
    }

    /// Number of sessions currently open.
    pub fn open(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

/// Held by a session for its lifetime.
#[derive(Debug)]
pub struct SessionGuard {
    open: Arc<AtomicUsize>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}
