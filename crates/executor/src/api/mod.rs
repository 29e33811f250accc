//! Typed service surface over the [`Executor`].

mod movies;

use std::sync::Arc;

use moviegraph_engine::GraphStore;

use crate::Executor;

/// Movie query service.
///
/// Wraps an [`Executor`] with one typed method per operation. Clone is
/// cheap; clones share the store.
#[derive(Debug, Clone)]
pub struct MovieService {
    executor: Executor,
}

impl MovieService {
    /// Create a service over `store`.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    /// Backend name of the underlying store.
    pub fn backend(&self) -> &'static str {
        self.executor.store().backend()
    }

    /// Release the underlying store.
    pub async fn shutdown(&self) -> crate::Result<()> {
        crate::convert::convert_result(self.executor.store().close().await)
    }
}
