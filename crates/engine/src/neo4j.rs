//! Neo4j backend over Bolt.
//!
//! [`Neo4jStore`] wraps a pooled `neo4rs::Graph`. A session borrows the pool
//! for one catalog query; rows are decoded column by column according to
//! [`Query::columns`].

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use moviegraph_core::{Field, GraphError, GraphResult, Node, Params, Record, Value};
use neo4rs::{ConfigBuilder, Graph, Row};

use crate::query::{ColumnKind, Query};
use crate::store::{GraphSession, GraphStore, SessionGuard, SessionTracker};

/// Connection settings for [`Neo4jStore`].
#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    /// Bolt URI, e.g. `bolt://localhost:7687`.
    pub uri: String,
    /// User name.
    pub user: String,
    /// Password.
    pub password: String,
    /// Connection pool size.
    pub max_connections: usize,
    /// Records fetched per round trip.
    pub fetch_size: usize,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
            max_connections: 16,
            fetch_size: 256,
        }
    }
}

/// Graph store backed by a Neo4j server.
pub struct Neo4jStore {
    graph: Graph,
    tracker: SessionTracker,
    closed: AtomicBool,
}

impl Neo4jStore {
    /// Connect to the server described by `config`.
    pub async fn connect(config: &Neo4jConfig) -> GraphResult<Self> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::store_with_detail("invalid Neo4j configuration", e))?;

        let graph = Graph::connect(neo_config).await.map_err(|e| {
            GraphError::store_with_detail(format!("cannot connect to {}", config.uri), e)
        })?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self {
            graph,
            tracker: SessionTracker::new(),
            closed: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    fn backend(&self) -> &'static str {
        "neo4j"
    }

    async fn open_session(&self) -> GraphResult<Box<dyn GraphSession>> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(GraphError::Closed);
        }
        Ok(Box::new(Neo4jSession {
            graph: self.graph.clone(),
            _guard: self.tracker.acquire(),
        }))
    }

    async fn close(&self) -> GraphResult<()> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::info!(open_sessions = self.tracker.open(), "Neo4j store closed");
        }
        Ok(())
    }

    fn open_sessions(&self) -> usize {
        self.tracker.open()
    }
}

struct Neo4jSession {
    graph: Graph,
    _guard: SessionGuard,
}

#[async_trait]
impl GraphSession for Neo4jSession {
    async fn run(&mut self, query: Query, params: &Params) -> GraphResult<Vec<Record>> {
        let statement = statement(query, params)?;
        let mut stream = self
            .graph
            .execute(statement)
            .await
            .map_err(|e| GraphError::store_with_detail(format!("{} failed", query), e))?;

        let mut records = Vec::new();
        while let Some(row) = stream
            .next()
            .await
            .map_err(|e| GraphError::store_with_detail(format!("{} failed", query), e))?
        {
            records.push(decode_row(query, &row)?);
        }
        Ok(records)
    }
}

/// Bind catalog parameters by name. Only scalar values have a Bolt binding.
fn statement(query: Query, params: &Params) -> GraphResult<neo4rs::Query> {
    let mut statement = neo4rs::query(query.cypher());
    for (name, value) in params.iter() {
        statement = match value {
            Value::Int(i) => statement.param(name, *i),
            Value::Float(f) => statement.param(name, *f),
            Value::String(s) => statement.param(name, s.as_str()),
            Value::Bool(b) => statement.param(name, *b),
            other => {
                return Err(GraphError::invalid_input(format!(
                    "parameter '{}' cannot be bound as {}",
                    name,
                    other.type_name()
                )))
            }
        };
    }
    Ok(statement)
}

fn decode_row(query: Query, row: &Row) -> GraphResult<Record> {
    let mut record = Record::new();
    for column in query.columns() {
        let field = match column.kind {
            ColumnKind::Value => row.get::<Value>(column.name).map(Field::Value),
            ColumnKind::Node => row.get::<Node>(column.name).map(Field::Node),
            ColumnKind::Nodes => row.get::<Vec<Node>>(column.name).map(Field::Nodes),
        }
        .map_err(|e| {
            GraphError::serialization(format!("column '{}' of {}: {}", column.name, query, e))
        })?;
        record.insert(column.name, field);
    }
    Ok(record)
}
