//! MovieGraph API Test Suite
//!
//! Exercises the public facade end to end over the in-memory store: the
//! bundled fixture for concrete scenarios, generated graphs for properties.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test movie_api
//! ```

mod test_utils;

mod detail;
mod lifecycle;
mod search;
mod search_properties;
mod similar;
