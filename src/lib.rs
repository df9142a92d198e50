//! Shortest paths between cities of a small transport network.
//!
//! Build a graph once (see [`graphs`]), then run any of
//! [`search::dijkstra`], [`search::astar`] or [`search::floyd_warshall`] on it
//! and turn the returned predecessor data into a [`search::path::Path`].

pub mod error;
pub mod graphs;
pub mod logging;
pub mod network;
pub mod search;
pub mod utility;

pub use error::{GraphError, Result};
