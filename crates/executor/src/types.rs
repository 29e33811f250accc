//! Response types returned by the movie service.
//!
//! These are the stable JSON shapes of the HTTP API.

use moviegraph_core::NodeId;
use serde::{Deserialize, Serialize};

/// One movie in a search, list or similarity result.
///
/// Optional properties serialize as `null`, never as missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Store-assigned node id.
    pub id: NodeId,
    /// Title, if the node has one.
    pub title: Option<String>,
    /// Release year.
    pub year: Option<i64>,
    /// Rating.
    pub rating: Option<f64>,
}

/// A node rendered as its stored properties plus `id` and `labels`.
///
/// `id` and `labels` take precedence over stored properties of the same
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeView(pub serde_json::Map<String, serde_json::Value>);

impl NodeView {
    /// Field by name.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// The node id.
    pub fn id(&self) -> Option<NodeId> {
        self.0.get("id").and_then(serde_json::Value::as_i64)
    }
}

/// A movie with its cast, directors and genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// The movie node.
    pub movie: NodeView,
    /// Distinct actors.
    pub actors: Vec<NodeView>,
    /// Distinct directors.
    pub directors: Vec<NodeView>,
    /// Distinct genres.
    pub genres: Vec<NodeView>,
}
