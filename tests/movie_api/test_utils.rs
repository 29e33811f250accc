//! Shared fixtures for the API suite.

use std::path::PathBuf;

use moviegraph::{MovieService, MovieSummary, NodeId, PropertyGraph, Value};

/// Ids from `fixtures/movies.json`.
pub mod ids {
    pub const HEAT: i64 = 0;
    pub const RONIN: i64 = 1;
    pub const THE_INSIDER: i64 = 2;
    pub const COLLATERAL: i64 = 3;
    pub const THE_GODFATHER: i64 = 4;
    pub const TAXI_DRIVER: i64 = 5;
    pub const ALIEN: i64 = 6;
    pub const BLADE_RUNNER: i64 = 7;
    pub const THE_IRISHMAN: i64 = 8;
    pub const ARRIVAL: i64 = 9;
    pub const AL_PACINO: i64 = 20;
    pub const MICHAEL_MANN: i64 = 30;
    pub const CRIME: i64 = 40;
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/movies.json")
}

pub fn fixture_service() -> MovieService {
    moviegraph::open_fixture(fixture_path()).expect("bundled fixture loads")
}

pub fn ids_of(movies: &[MovieSummary]) -> Vec<NodeId> {
    movies.iter().map(|m| m.id).collect()
}

/// Adds a Movie node with the given optional properties.
pub fn add_movie(
    g: &mut PropertyGraph,
    title: Option<&str>,
    year: Option<i64>,
    rating: Option<f64>,
) -> NodeId {
    let mut props = Vec::new();
    if let Some(t) = title {
        props.push(("title", Value::from(t)));
    }
    if let Some(y) = year {
        props.push(("year", Value::from(y)));
    }
    if let Some(r) = rating {
        props.push(("rating", Value::from(r)));
    }
    g.add_node(&["Movie"], props)
}
