use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{
    error::Result,
    graphs::{Distance, Graph, VertexId},
};

/// Runs Dijkstra from `data.source()` using the given working state.
///
/// The queue pops equal keys in ascending vertex order, so vertices are
/// settled in the same order as a linear scan for the minimum would settle
/// them. If a target is given the search stops as soon as it is settled.
/// Returns the number of settled vertices.
pub fn dijkstra(
    graph: &dyn Graph,
    data: &mut DijkstraDataVec,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    target: Option<VertexId>,
) -> u32 {
    let mut settled = 0;
    queue.insert(data.source(), 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        settled += 1;
        if Some(tail) == target {
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
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }

    settled
}

/// Shortest distances and predecessors from `source` to every vertex.
pub fn dijkstra_one_to_all(graph: &dyn Graph, source: VertexId) -> Result<DijkstraDataVec> {
    graph.check_vertex(source)?;

    let number_of_vertices = graph.number_of_vertices();
    let mut data = DijkstraDataVec::new(number_of_vertices, source);
    let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    let settled = dijkstra(graph, &mut data, &mut expanded, &mut queue, None);
    tracing::debug!(source, settled, "dijkstra one to all");

    Ok(data)
}

/// Stops once `target` is settled. Distances of vertices that were not
/// settled before the target are tentative.
pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<DijkstraDataVec> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    let number_of_vertices = graph.number_of_vertices();
    let mut data = DijkstraDataVec::new(number_of_vertices, source);
    let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    let settled = dijkstra(graph, &mut data, &mut expanded, &mut queue, Some(target));
    tracing::debug!(source, target, settled, "dijkstra one to one");

    Ok(data)
}

/// Dijkstra with an O(n²) linear scan for the next vertex instead of a
/// priority queue. Runs `n - 1` rounds, each settling the unvisited vertex
/// with the smallest distance, lowest index first.
pub fn dijkstra_one_to_all_dense(graph: &dyn Graph, source: VertexId) -> Result<DijkstraDataVec> {
    graph.check_vertex(source)?;

    let number_of_vertices = graph.number_of_vertices();
    let mut data = DijkstraDataVec::new(number_of_vertices, source);
    let mut visited = VertexExpandedDataVec::new(number_of_vertices);

    for _ in 1..number_of_vertices {
        let Some((distance_tail, tail)) = graph
            .vertices()
            .filter(|&vertex| !visited.is_expanded(vertex))
            .filter_map(|vertex| Some((data.get_distance(vertex)?, vertex)))
            .min()
        else {
            // everything left is unreachable
            break;
        };

        visited.expand(tail);

        for edge in graph.edges(tail) {
            if !visited.is_expanded(edge.head) {
                data.relax(tail, edge.head, distance_tail + edge.weight as Distance);
            }
        }
    }

    tracing::debug!(
        source,
        settled = visited.number_of_expanded(),
        "dense dijkstra one to all"
    );

    Ok(data)
}

/// [`PathFinding`] over a borrowed graph, one Dijkstra run per request.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>> {
        let data = dijkstra_one_to_one(self.graph, request.source, request.target)?;
        Ok(data.get_path(request.target))
    }

    fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GraphError,
        graphs::{vec_vec_graph::VecVecGraph, WeightedEdge},
    };

    fn diamond() -> VecVecGraph {
        // 0 -> 3 has two paths of cost 4
        VecVecGraph::from_edges(
            4,
            &[
                WeightedEdge::new(0, 2, 2),
                WeightedEdge::new(0, 1, 2),
                WeightedEdge::new(1, 3, 2),
                WeightedEdge::new(2, 3, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn ties_prefer_lower_vertex() {
        let data = dijkstra_one_to_all(&diamond(), 0).unwrap();

        assert_eq!(data.get_distance(3), Some(4));
        // vertex 1 is settled before vertex 2 and relaxes 3 first
        assert_eq!(data.get_predecessor(3), Some(1));
        assert_eq!(data.get_path(3).unwrap().vertices, vec![0, 1, 3]);
    }

    #[test]
    fn dense_and_heap_agree() {
        let graph = diamond();
        for source in graph.vertices() {
            assert_eq!(
                dijkstra_one_to_all(&graph, source).unwrap(),
                dijkstra_one_to_all_dense(&graph, source).unwrap()
            );
        }
    }

    #[test]
    fn one_to_one_stops_at_target() {
        let graph = diamond();
        let data = dijkstra_one_to_one(&graph, 0, 1).unwrap();
        assert_eq!(data.get_distance(1), Some(2));
        // 3 is never relaxed because 1 is settled first
        assert_eq!(data.get_distance(3), None);
    }

    #[test]
    fn out_of_range_source() {
        let graph = diamond();
        assert!(matches!(
            dijkstra_one_to_all(&graph, 4),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(dijkstra_one_to_all_dense(&graph, 4).is_err());
        assert!(dijkstra_one_to_one(&graph, 0, 4).is_err());
    }
}
