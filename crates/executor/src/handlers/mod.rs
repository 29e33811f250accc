//! Command handlers.

pub mod movies;
