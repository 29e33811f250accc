//! Query result records and query parameters.

use std::collections::BTreeMap;

use crate::error::{GraphError, GraphResult};
use crate::node::Node;
use crate::value::Value;

/// One column of a result record.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A scalar (or list) property value.
    Value(Value),
    /// A single node.
    Node(Node),
    /// A collected list of nodes.
    Nodes(Vec<Node>),
}

impl Field {
    fn kind(&self) -> &'static str {
        match self {
            Field::Value(_) => "value",
            Field::Node(_) => "node",
            Field::Nodes(_) => "node list",
        }
    }
}

impl From<Value> for Field {
    fn from(v: Value) -> Self {
        Field::Value(v)
    }
}

impl From<Node> for Field {
    fn from(n: Node) -> Self {
        Field::Node(n)
    }
}

impl From<Vec<Node>> for Field {
    fn from(nodes: Vec<Node>) -> Self {
        Field::Nodes(nodes)
    }
}

/// One row of a query result: a named mapping from field to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field.
    pub fn with(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.insert(name, field);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, field: impl Into<Field>) {
        self.fields.insert(name.into(), field.into());
    }

    /// Raw field access.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Scalar field. A missing field reads as `Null`, matching how a store
    /// returns absent properties.
    pub fn value(&self, name: &str) -> GraphResult<&Value> {
        static NULL: Value = Value::Null;
        match self.fields.get(name) {
            None => Ok(&NULL),
            Some(Field::Value(v)) => Ok(v),
            Some(other) => Err(wrong_type(name, "value", other)),
        }
    }

    /// Required single-node field.
    pub fn node(&self, name: &str) -> GraphResult<&Node> {
        match self.fields.get(name) {
            Some(Field::Node(n)) => Ok(n),
            Some(other) => Err(wrong_type(name, "node", other)),
            None => Err(GraphError::missing_field(name)),
        }
    }

    /// Node-list field. A missing field reads as an empty list.
    pub fn nodes(&self, name: &str) -> GraphResult<&[Node]> {
        match self.fields.get(name) {
            Some(Field::Nodes(ns)) => Ok(ns),
            Some(other) => Err(wrong_type(name, "node list", other)),
            None => Ok(&[]),
        }
    }

    /// Remove and return a required single-node field.
    pub fn take_node(&mut self, name: &str) -> GraphResult<Node> {
        match self.fields.remove(name) {
            Some(Field::Node(n)) => Ok(n),
            Some(other) => Err(wrong_type(name, "node", &other)),
            None => Err(GraphError::missing_field(name)),
        }
    }

    /// Remove and return a node-list field, empty if missing.
    pub fn take_nodes(&mut self, name: &str) -> GraphResult<Vec<Node>> {
        match self.fields.remove(name) {
            Some(Field::Nodes(ns)) => Ok(ns),
            Some(other) => Err(wrong_type(name, "node list", &other)),
            None => Ok(Vec::new()),
        }
    }
}

fn wrong_type(name: &str, expected: &'static str, found: &Field) -> GraphError {
    GraphError::WrongFieldType {
        field: name.to_string(),
        expected,
        actual: found.kind(),
    }
}

/// Named query parameters.
///
/// Parameters are the only channel for caller input; query text is fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: bind a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up a bound parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Required string parameter.
    pub fn require_str(&self, name: &str) -> GraphResult<&str> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                GraphError::invalid_input(format!("parameter '{}' must be a string", name))
            })
    }

    /// Required integer parameter.
    pub fn require_i64(&self, name: &str) -> GraphResult<i64> {
        self.get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                GraphError::invalid_input(format!("parameter '{}' must be an integer", name))
            })
    }

    /// Iterate bound parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64) -> Node {
        Node::new(id).with_label("Movie")
    }

    #[test]
    fn missing_scalar_reads_as_null() {
        let rec = Record::new().with("id", Value::Int(1));
        assert_eq!(rec.value("id").unwrap(), &Value::Int(1));
        assert!(rec.value("rating").unwrap().is_null());
    }

    #[test]
    fn missing_node_is_an_error() {
        let rec = Record::new();
        assert_eq!(
            rec.node("movie").unwrap_err(),
            GraphError::missing_field("movie")
        );
    }

    #[test]
    fn missing_node_list_reads_as_empty() {
        let rec = Record::new().with("movie", movie(1));
        assert!(rec.nodes("genres").unwrap().is_empty());
    }

    #[test]
    fn wrong_kind_is_reported() {
        let rec = Record::new().with("movie", Value::Int(1));
        let err = rec.node("movie").unwrap_err();
        assert_eq!(
            err,
            GraphError::WrongFieldType {
                field: "movie".into(),
                expected: "node",
                actual: "value",
            }
        );
    }

    #[test]
    fn take_moves_fields_out() {
        let mut rec = Record::new()
            .with("movie", movie(1))
            .with("actors", vec![Node::new(2), Node::new(3)]);
        let m = rec.take_node("movie").unwrap();
        assert_eq!(m.id, 1);
        let actors = rec.take_nodes("actors").unwrap();
        assert_eq!(actors.len(), 2);
        assert!(rec.is_empty());
    }

    #[test]
    fn params_require_typed_values() {
        let params = Params::new().with("title", "heat").with("movie_id", 4i64);
        assert_eq!(params.require_str("title").unwrap(), "heat");
        assert_eq!(params.require_i64("movie_id").unwrap(), 4);
        assert!(params.require_i64("title").is_err());
        assert!(params.require_str("missing").is_err());
        assert_eq!(params.len(), 2);
    }
}
