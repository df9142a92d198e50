use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Edge, Graph, VertexId};

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: VertexId,
    pub target: VertexId,
}

impl ShortestPathRequest {
    pub fn new(source: VertexId, target: VertexId) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }
}

/// The vertices of a path from source to target, both included, and the sum
/// of the weights along it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

/// Sums the edge weights along `vertices`, or `None` if two consecutive
/// vertices are not connected.
pub fn path_distance(graph: &dyn Graph, vertices: &[VertexId]) -> Option<Distance> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| {
            graph
                .get_weight(&Edge { tail, head })
                .map(|weight| weight as Distance)
        })
        .sum()
}

/// Checks a found path against the expected distance of a request.
pub fn validate_path(
    graph: &dyn Graph,
    request: &ShortestPathRequest,
    expected: Option<Distance>,
    path: &Option<Path>,
) -> Result<(), String> {
    let (path, expected) = match (path, expected) {
        (None, None) => return Ok(()),
        (Some(_), None) => return Err("a path was found where there should be none".to_string()),
        (None, Some(_)) => return Err("no path is found but there should be one".to_string()),
        (Some(path), Some(expected)) => (path, expected),
    };

    if path.vertices.first() != Some(&request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let true_distance = path_distance(graph, &path.vertices)
        .ok_or_else(|| "path uses an edge that does not exist".to_string())?;

    if path.distance != true_distance || path.distance != expected {
        return Err(format!(
            "wrong path distance: reported {}, edges sum to {}, expected {}",
            path.distance, true_distance, expected
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{vec_vec_graph::VecVecGraph, WeightedEdge};

    fn triangle() -> VecVecGraph {
        VecVecGraph::from_edges(
            3,
            &[
                WeightedEdge::new(0, 1, 2),
                WeightedEdge::new(1, 2, 3),
                WeightedEdge::new(0, 2, 9),
            ],
        )
        .unwrap()
    }

    #[test]
    fn distance_along_path() {
        let graph = triangle();
        assert_eq!(path_distance(&graph, &[0, 1, 2]), Some(5));
        assert_eq!(path_distance(&graph, &[2]), Some(0));
        assert_eq!(path_distance(&graph, &[0, 0]), None);
    }

    #[test]
    fn validation() {
        let graph = triangle();
        let request = ShortestPathRequest::new(0, 2);
        let good = Some(Path {
            vertices: vec![0, 1, 2],
            distance: 5,
        });
        let direct = Some(Path {
            vertices: vec![0, 2],
            distance: 9,
        });

        assert_eq!(validate_path(&graph, &request, Some(5), &good), Ok(()));
        assert!(validate_path(&graph, &request, Some(5), &direct).is_err());
        assert!(validate_path(&graph, &request, None, &good).is_err());
        assert!(validate_path(&graph, &request, Some(5), &None).is_err());
        assert_eq!(validate_path(&graph, &request, None, &None), Ok(()));
    }
}
