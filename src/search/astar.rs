use serde::{Deserialize, Serialize};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    path::{Path, ShortestPathRequest},
    DistanceHeuristic, PathFinding,
};
use crate::{
    error::Result,
    graphs::{Distance, Graph, VertexId},
};

/// Result of an A* search. Only expanded vertices keep a distance and a
/// predecessor; everything else reads as unreached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AStarData {
    data: DijkstraDataVec,
    target: VertexId,
    number_of_expanded: u32,
}

impl AStarData {
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Distance reached for the target, `None` if the frontier ran empty.
    pub fn distance(&self) -> Option<Distance> {
        self.data.get_distance(self.target)
    }

    pub fn distances(&self) -> &[Option<Distance>] {
        self.data.distances()
    }

    pub fn path(&self) -> Option<Path> {
        self.data.get_path(self.target)
    }

    pub fn number_of_expanded(&self) -> u32 {
        self.number_of_expanded
    }
}

impl DijkstraData for AStarData {
    fn source(&self) -> VertexId {
        self.data.source()
    }

    fn number_of_vertices(&self) -> u32 {
        self.data.number_of_vertices()
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.data.get_predecessor(vertex)
    }

    fn get_distance(&self, vertex: VertexId) -> Option<Distance> {
        self.data.get_distance(vertex)
    }
}

/// Best first search from `source` to `target`, expanding vertices in order
/// of `distance + heuristic.lower_bound(vertex, target)`.
///
/// The result is only guaranteed to be optimal if the heuristic never
/// overestimates the remaining distance. With an estimate that is also
/// consistent, no vertex would ever need to be expanded twice; vertices are
/// expanded at most once regardless.
pub fn astar_one_to_one(
    graph: &dyn Graph,
    heuristic: &dyn DistanceHeuristic,
    source: VertexId,
    target: VertexId,
) -> Result<AStarData> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    let number_of_vertices = graph.number_of_vertices();
    let mut data = DijkstraDataVec::new(number_of_vertices, source);
    let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    queue.insert(source, heuristic.lower_bound(source, target));

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        let Some(distance_tail) = data.get_distance(tail) else {
            continue;
        };

        for edge in graph.edges(tail) {
            if expanded.is_expanded(edge.head) {
                continue;
            }
            let alternative_distance_head = distance_tail + edge.weight as Distance;
            if data.relax(tail, edge.head, alternative_distance_head) {
                let key = alternative_distance_head
                    .saturating_add(heuristic.lower_bound(edge.head, target));
                queue.insert(edge.head, key);
            }
        }
    }

    for vertex in graph.vertices() {
        if !expanded.is_expanded(vertex) {
            data.unset(vertex);
        }
    }

    let number_of_expanded = expanded.number_of_expanded();
    tracing::debug!(
        source,
        target,
        expanded = number_of_expanded,
        distance = ?data.get_distance(target),
        "astar one to one"
    );

    Ok(AStarData {
        data,
        target,
        number_of_expanded,
    })
}

/// [`PathFinding`] with a fixed heuristic.
pub struct AStar<'a> {
    graph: &'a dyn Graph,
    heuristic: &'a dyn DistanceHeuristic,
}

impl<'a> AStar<'a> {
    pub fn new(graph: &'a dyn Graph, heuristic: &'a dyn DistanceHeuristic) -> AStar<'a> {
        AStar { graph, heuristic }
    }
}

impl<'a> PathFinding for AStar<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>> {
        let data = astar_one_to_one(self.graph, self.heuristic, request.source, request.target)?;
        Ok(data.path())
    }

    fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::{graph_factory::GraphFactory, vec_vec_graph::VecVecGraph, WeightedEdge},
        search::{FnHeuristic, TrivialHeuristic},
    };

    #[test]
    fn exact_heuristic_only_expands_the_path() {
        // line 0 - 1 - ... - 9, every edge 1
        let graph = GraphFactory::line(10, 1).unwrap();
        let exact = FnHeuristic::new(|vertex: VertexId, target: VertexId| {
            vertex.abs_diff(target) as Distance
        });

        let data = astar_one_to_one(&graph, &exact, 2, 6).unwrap();
        assert_eq!(data.distance(), Some(4));
        assert_eq!(data.path().unwrap().vertices, vec![2, 3, 4, 5, 6]);
        assert_eq!(data.number_of_expanded(), 5);

        let trivial = astar_one_to_one(&graph, &TrivialHeuristic {}, 2, 6).unwrap();
        assert_eq!(trivial.distance(), Some(4));
        assert!(trivial.number_of_expanded() > data.number_of_expanded());
    }

    #[test]
    fn unexpanded_vertices_read_as_unreached() {
        let graph = GraphFactory::line(10, 1).unwrap();
        let data = astar_one_to_one(&graph, &TrivialHeuristic {}, 0, 3).unwrap();

        assert_eq!(data.get_distance(3), Some(3));
        // the search stops before relaxing the edges of the target
        assert_eq!(data.get_distance(4), None);
        assert!(data.distances()[4..].iter().all(Option::is_none));
    }

    #[test]
    fn overestimating_heuristic_may_miss_the_optimum() {
        // direct edge 0 - 2 costs 10, the detour via 1 costs 2
        let graph = VecVecGraph::from_edges(
            3,
            &[
                WeightedEdge::new(0, 2, 10),
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
            ],
        )
        .unwrap();
        let misleading = FnHeuristic::new(|vertex: VertexId, _target: VertexId| {
            if vertex == 1 {
                100
            } else {
                0
            }
        });

        let data = astar_one_to_one(&graph, &misleading, 0, 2).unwrap();
        assert_eq!(data.distance(), Some(10));
    }

    #[test]
    fn unreachable_target() {
        let graph = VecVecGraph::new(2);
        let data = astar_one_to_one(&graph, &TrivialHeuristic {}, 0, 1).unwrap();
        assert_eq!(data.distance(), None);
        assert_eq!(data.path(), None);
        assert!(astar_one_to_one(&graph, &TrivialHeuristic {}, 0, 2).is_err());
    }
}
