//! Graph nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::Value;

/// Store-assigned node identifier. Stable for the lifetime of the store.
pub type NodeId = i64;

/// A graph node: identity, type labels and a dynamic property map.
///
/// The serde shape `{ "id", "labels", "properties" }` is also the projection
/// the Cypher catalog returns for node columns, so driver rows deserialize
/// straight into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Store-assigned id.
    pub id: NodeId,
    /// Type labels, e.g. `["Movie"]`.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Stored properties.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    /// Create a node with no labels and no properties.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder: add a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Builder: set a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// True if the node carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Property by key. Absent keys and explicit nulls both read as `Null`.
    pub fn property(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.properties.get(key).unwrap_or(&NULL)
    }
}
