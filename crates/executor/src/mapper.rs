//! Record-to-response mapping.
//!
//! Converts store records and nodes into [`MovieSummary`], [`NodeView`] and
//! [`MovieDetail`]. Optional properties with an unexpected type (a string
//! year, a non-finite rating) map to `None` rather than failing the request.

use moviegraph_core::{Node, Record, Value};
use moviegraph_engine::query::columns;

use crate::types::{MovieDetail, MovieSummary, NodeView};
use crate::{Error, Result};

/// Build a summary from a search or list row.
pub fn summary_from_record(record: &Record) -> Result<MovieSummary> {
    let id = record
        .value(columns::ID)?
        .as_i64()
        .ok_or_else(|| Error::Serialization {
            reason: format!("column '{}' is not an integer", columns::ID),
        })?;
    Ok(MovieSummary {
        id,
        title: title(record.value(columns::TITLE)?),
        year: year(record.value(columns::YEAR)?),
        rating: rating(record.value(columns::RATING)?),
    })
}

/// Build a summary from a Movie node.
pub fn summary_from_node(node: &Node) -> MovieSummary {
    MovieSummary {
        id: node.id,
        title: title(node.property("title")),
        year: year(node.property("year")),
        rating: rating(node.property("rating")),
    }
}

/// Render a node as `{...properties, id, labels}`.
pub fn node_view(node: &Node) -> Result<NodeView> {
    let mut map = serde_json::Map::with_capacity(node.properties.len() + 2);
    for (key, value) in &node.properties {
        map.insert(key.clone(), to_json(value)?);
    }
    map.insert("id".to_string(), serde_json::Value::from(node.id));
    map.insert(
        "labels".to_string(),
        serde_json::Value::from(node.labels.clone()),
    );
    Ok(NodeView(map))
}

/// Build a detail response from a detail row.
pub fn detail_from_record(mut record: Record) -> Result<MovieDetail> {
    let movie = node_view(&record.take_node(columns::MOVIE)?)?;
    Ok(MovieDetail {
        movie,
        actors: node_views(&record.take_nodes(columns::ACTORS)?)?,
        directors: node_views(&record.take_nodes(columns::DIRECTORS)?)?,
        genres: node_views(&record.take_nodes(columns::GENRES)?)?,
    })
}

fn node_views(nodes: &[Node]) -> Result<Vec<NodeView>> {
    nodes.iter().map(node_view).collect()
}

fn to_json(value: &Value) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| Error::Serialization {
        reason: e.to_string(),
    })
}

fn title(v: &Value) -> Option<String> {
    v.as_str().map(str::to_string)
}

fn year(v: &Value) -> Option<i64> {
    match v {
        Value::Int(i) => Some(*i),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
        _ => None,
    }
}

fn rating(v: &Value) -> Option<f64> {
    v.as_f64().filter(|f| f.is_finite())
}
