use path::{Path, ShortestPathRequest};

use crate::{
    error::Result,
    graphs::{Distance, VertexId},
};

pub mod alt;
pub mod astar;
pub mod collections;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod path;

/// Estimate of the remaining distance from `vertex` to `target`.
///
/// A* only returns shortest paths if the estimate is admissible, i.e. never
/// larger than the true distance. This is not checked.
pub trait DistanceHeuristic: Send + Sync {
    fn lower_bound(&self, _vertex: VertexId, _target: VertexId) -> Distance {
        0
    }
}

/// Always estimates zero, which turns A* into Dijkstra.
pub struct TrivialHeuristic {}

impl DistanceHeuristic for TrivialHeuristic {}

/// Wraps any `Fn(vertex, target) -> Distance` as a heuristic.
pub struct FnHeuristic<F> {
    pub function: F,
}

impl<F> FnHeuristic<F>
where
    F: Fn(VertexId, VertexId) -> Distance + Send + Sync,
{
    pub fn new(function: F) -> Self {
        FnHeuristic { function }
    }
}

impl<F> DistanceHeuristic for FnHeuristic<F>
where
    F: Fn(VertexId, VertexId) -> Distance + Send + Sync,
{
    fn lower_bound(&self, vertex: VertexId, target: VertexId) -> Distance {
        (self.function)(vertex, target)
    }
}

pub trait PathFinding {
    /// `Ok(None)` means there is no path between source and target.
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>>;

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Result<Option<Distance>> {
        Ok(self.shortest_path(request)?.map(|path| path.distance))
    }

    fn number_of_vertices(&self) -> u32;
}
