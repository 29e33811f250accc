//! Store initialization, serving and shutdown.

use std::future::Future;
use std::sync::Arc;

use moviegraph_core::GraphError;
use moviegraph_engine::{GraphStore, MemoryStore, PropertyGraph};
use tokio::net::TcpListener;

use crate::app::{build_router, AppState};
use crate::config::{AppConfig, Backend, ConfigError, ServerConfig, StoreConfig};

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store could not be initialized.
    #[error("graph store initialization failed: {0}")]
    Store(#[from] GraphError),

    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialize the configured graph store.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn GraphStore>, StartupError> {
    match config.backend {
        Backend::Memory => {
            let store = match &config.fixture {
                Some(path) => {
                    tracing::info!(fixture = %path.display(), "Loading graph fixture");
                    MemoryStore::from_fixture(path)?
                }
                None => {
                    tracing::warn!("No fixture configured; serving an empty graph");
                    MemoryStore::new(PropertyGraph::new())
                }
            };
            Ok(Arc::new(store))
        }
        #[cfg(feature = "neo4j")]
        Backend::Neo4j => {
            let neo = moviegraph_engine::Neo4jConfig {
                uri: config.uri.clone(),
                user: config.user.clone(),
                password: config.password.clone(),
                max_connections: config.max_connections,
                fetch_size: config.fetch_size,
            };
            let store = moviegraph_engine::Neo4jStore::connect(&neo).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "neo4j"))]
        Backend::Neo4j => Err(ConfigError::FeatureDisabled {
            backend: Backend::Neo4j.as_str(),
            feature: "neo4j",
        }
        .into()),
    }
}

/// Serve `state` on `listener` until `shutdown` resolves, then close the
/// store once in-flight requests have drained.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let service = state.service.clone();
    let router = build_router(state, config);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await;

    if let Err(e) = service.shutdown().await {
        tracing::warn!(error = %e, "Graph store did not close cleanly");
    }
    served?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Validate `config`, initialize the store, and serve until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;
    let addr = config.bind_addr()?;

    let store = connect_store(&config.store).await?;
    let backend = store.backend();
    let state = AppState::new(store);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, backend, "MovieGraph listening");
    tracing::info!("Health check available at http://{}/health", addr);

    serve(listener, state, &config.server, shutdown_signal()).await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            tracing::warn!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
