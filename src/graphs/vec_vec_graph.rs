use serde::{Deserialize, Serialize};

use super::{validate_edge, Edge, Graph, TaillessEdge, VertexId, Weight, WeightedEdge};
use crate::error::Result;

/// Adjacency list graph. Neighbors are kept in insertion order, which decides
/// the order in which searches relax them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    pub fn new(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<VecVecGraph> {
        let mut graph = VecVecGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Copies another graph, keeping its neighbor order.
    pub fn from_graph(graph: &dyn Graph) -> VecVecGraph {
        VecVecGraph {
            edges: graph
                .vertices()
                .map(|vertex| graph.edges(vertex).map(|edge| edge.remove_tail()).collect())
                .collect(),
        }
    }

    fn set_directed(&mut self, edge: &WeightedEdge) {
        let edges_sharing_tail = &mut self.edges[edge.tail as usize];

        match edges_sharing_tail
            .iter_mut()
            .find(|tailless_edge| tailless_edge.head == edge.head)
        {
            // Update in place so the neighbor keeps its position.
            Some(tailless_edge) => tailless_edge.weight = edge.weight,
            None => edges_sharing_tail.push(edge.remove_tail()),
        }
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edge_iter = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
            .iter();

        Box::new(EdgeIterator { edge_iter, tail })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        self.edges
            .get(edge.tail as usize)?
            .iter()
            .find(|tailless_edge| tailless_edge.head == edge.head)
            .map(|tailless_edge| tailless_edge.weight)
    }

    fn add_edge(&mut self, edge: &WeightedEdge) -> Result<()> {
        validate_edge(edge, self.number_of_vertices())?;
        self.set_directed(edge);
        self.set_directed(&edge.reversed());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::GraphError, graphs::is_bidirectional};

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = VecVecGraph::new(3);
        graph.add_edge(&WeightedEdge::new(0, 2, 7)).unwrap();

        assert_eq!(graph.get_weight(&Edge { tail: 0, head: 2 }), Some(7));
        assert_eq!(graph.get_weight(&Edge { tail: 2, head: 0 }), Some(7));
        assert_eq!(graph.get_weight(&Edge { tail: 0, head: 1 }), None);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(is_bidirectional(&graph));
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut graph = VecVecGraph::new(4);
        graph.add_edge(&WeightedEdge::new(0, 3, 1)).unwrap();
        graph.add_edge(&WeightedEdge::new(0, 1, 2)).unwrap();
        graph.add_edge(&WeightedEdge::new(2, 0, 3)).unwrap();
        // Replacing a weight must not move the neighbor.
        graph.add_edge(&WeightedEdge::new(0, 3, 9)).unwrap();

        let neighbors: Vec<_> = graph.edges(0).map(|edge| (edge.head, edge.weight)).collect();
        assert_eq!(neighbors, vec![(3, 9), (1, 2), (2, 3)]);
        assert_eq!(graph.edges(0).len(), 3);
    }

    #[test]
    fn invalid_edges_are_rejected() {
        let mut graph = VecVecGraph::new(2);

        for edge in [
            WeightedEdge::new(1, 1, 4),
            WeightedEdge::new(0, 1, 0),
            WeightedEdge::new(0, 2, 4),
            WeightedEdge::new(5, 0, 4),
        ] {
            assert!(matches!(
                graph.add_edge(&edge),
                Err(GraphError::InvalidArgument(_))
            ));
        }
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn edges_of_unknown_vertex_are_empty() {
        let graph = VecVecGraph::new(1);
        assert_eq!(graph.edges(7).count(), 0);
    }
}
