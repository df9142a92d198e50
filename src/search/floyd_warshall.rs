use serde::{Deserialize, Serialize};

use super::{
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{
    error::{GraphError, Result},
    graphs::{Distance, Graph, VertexId},
};

/// Distance and predecessor matrices for every pair of vertices, stored row
/// major. `predecessor(i, j)` is the vertex before `j` on the shortest path
/// from `i` to `j`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPairsData {
    number_of_vertices: u32,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<VertexId>>,
}

impl AllPairsData {
    fn new(number_of_vertices: u32) -> AllPairsData {
        let cells = number_of_vertices as usize * number_of_vertices as usize;
        AllPairsData {
            number_of_vertices,
            distances: vec![None; cells],
            predecessors: vec![None; cells],
        }
    }

    fn index(&self, source: VertexId, target: VertexId) -> usize {
        source as usize * self.number_of_vertices as usize + target as usize
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    /// `None` if there is no path or either vertex is out of range.
    pub fn get_distance(&self, source: VertexId, target: VertexId) -> Option<Distance> {
        if source >= self.number_of_vertices || target >= self.number_of_vertices {
            return None;
        }
        self.distances[self.index(source, target)]
    }

    pub fn get_predecessor(&self, source: VertexId, target: VertexId) -> Option<VertexId> {
        if source >= self.number_of_vertices || target >= self.number_of_vertices {
            return None;
        }
        self.predecessors[self.index(source, target)]
    }

    /// The row of distances from `source`.
    pub fn distances_from(&self, source: VertexId) -> &[Option<Distance>] {
        if source >= self.number_of_vertices {
            return &[];
        }
        let start = self.index(source, 0);
        &self.distances[start..start + self.number_of_vertices as usize]
    }

    /// Reconstructs the path from `source` to `target`.
    ///
    /// Walks `predecessor(source, ·)` backwards from the target, collecting
    /// vertices, and reverses them at the end. This gives the same order as
    /// expanding the path to `predecessor(source, target)` first and then
    /// appending the target, without recursion.
    pub fn get_path(&self, source: VertexId, target: VertexId) -> Result<Option<Path>> {
        for vertex in [source, target] {
            if vertex >= self.number_of_vertices {
                return Err(GraphError::vertex_out_of_range(
                    vertex,
                    self.number_of_vertices,
                ));
            }
        }

        let Some(distance) = self.get_distance(source, target) else {
            return Ok(None);
        };

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            if vertices.len() > self.number_of_vertices as usize {
                tracing::warn!(source, target, "predecessor matrix contains a loop");
                return Ok(None);
            }
            let Some(predecessor) = self.get_predecessor(source, current) else {
                return Ok(None);
            };
            current = predecessor;
            vertices.push(current);
        }

        vertices.reverse();
        Ok(Some(Path { vertices, distance }))
    }
}

/// All pairs shortest paths in O(n³).
///
/// The intermediate vertex `k` is the outermost loop: after round `k` every
/// entry is optimal among paths whose inner vertices are all `<= k`. Missing
/// distances are `None`, so no sum involving an unreachable pair is ever
/// formed.
pub fn floyd_warshall(graph: &dyn Graph) -> AllPairsData {
    let number_of_vertices = graph.number_of_vertices();
    let n = number_of_vertices as usize;
    let mut data = AllPairsData::new(number_of_vertices);

    for vertex in graph.vertices() {
        let index = data.index(vertex, vertex);
        data.distances[index] = Some(0);
        for edge in graph.edges(vertex) {
            let index = data.index(edge.tail, edge.head);
            data.distances[index] = Some(edge.weight as Distance);
            data.predecessors[index] = Some(edge.tail);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(distance_ik) = data.distances[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(distance_kj) = data.distances[k * n + j] else {
                    continue;
                };
                let alternative = distance_ik + distance_kj;
                if data.distances[i * n + j].map_or(true, |current| alternative < current) {
                    data.distances[i * n + j] = Some(alternative);
                    data.predecessors[i * n + j] = data.predecessors[k * n + j];
                }
            }
        }
        tracing::trace!(k, "floyd warshall round done");
    }

    tracing::debug!(
        vertices = number_of_vertices,
        reachable_pairs = data.distances.iter().flatten().count(),
        "floyd warshall"
    );

    data
}

impl PathFinding for AllPairsData {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>> {
        self.get_path(request.source, request.target)
    }

    fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{vec_vec_graph::VecVecGraph, WeightedEdge};

    #[test]
    fn predecessors_point_to_the_last_hop() {
        // 0 - 1 - 2 - 3 with a long direct edge 0 - 3
        let graph = VecVecGraph::from_edges(
            4,
            &[
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(2, 3, 1),
                WeightedEdge::new(0, 3, 10),
            ],
        )
        .unwrap();
        let data = floyd_warshall(&graph);

        assert_eq!(data.get_distance(0, 3), Some(3));
        assert_eq!(data.get_predecessor(0, 3), Some(2));
        assert_eq!(data.get_predecessor(3, 0), Some(1));
        assert_eq!(data.get_predecessor(2, 2), None);
        assert_eq!(
            data.get_path(3, 0).unwrap().unwrap().vertices,
            vec![3, 2, 1, 0]
        );
        assert_eq!(
            data.distances_from(1).to_vec(),
            vec![Some(1), Some(0), Some(1), Some(2)]
        );
    }

    #[test]
    fn empty_graph() {
        let data = floyd_warshall(&VecVecGraph::new(0));
        assert_eq!(data.number_of_vertices(), 0);
        assert_eq!(data.get_distance(0, 0), None);
        assert!(data.distances_from(0).is_empty());
        assert!(data.get_path(0, 0).is_err());
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let weight = u32::MAX;
        let graph = VecVecGraph::from_edges(
            3,
            &[WeightedEdge::new(0, 1, weight), WeightedEdge::new(1, 2, weight)],
        )
        .unwrap();
        let data = floyd_warshall(&graph);

        assert_eq!(data.get_distance(0, 2), Some(2 * weight as Distance));
    }
}
