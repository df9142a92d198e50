use serde::{Deserialize, Serialize};

use super::{validate_edge, Edge, Graph, VertexId, Weight, WeightedEdge};
use crate::error::Result;

/// Dense graph where `edges[tail][head]` holds the weight, `None` meaning
/// "no edge". Neighbors are yielded in ascending vertex order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatrixGraph {
    edges: Vec<Vec<Option<Weight>>>,
}

impl MatrixGraph {
    pub fn new(number_of_vertices: u32) -> MatrixGraph {
        let n = number_of_vertices as usize;
        MatrixGraph {
            edges: vec![vec![None; n]; n],
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<MatrixGraph> {
        let mut graph = MatrixGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn from_graph(graph: &dyn Graph) -> MatrixGraph {
        let mut matrix = MatrixGraph::new(graph.number_of_vertices());
        for vertex in graph.vertices() {
            for edge in graph.edges(vertex) {
                matrix.edges[edge.tail as usize][edge.head as usize] = Some(edge.weight);
            }
        }
        matrix
    }

    pub fn rows(&self) -> &[Vec<Option<Weight>>] {
        &self.edges
    }
}

impl Graph for MatrixGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        (self.edges.iter().flatten().flatten().count() / 2) as u32
    }

    fn edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct OutEdgeIterator<'a> {
            source: VertexId,
            current_head: VertexId,
            row: &'a [Option<Weight>],
            remaining: usize,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                while (self.current_head as usize) < self.row.len() {
                    let head = self.current_head;
                    self.current_head += 1;

                    if let Some(weight) = self.row[head as usize] {
                        self.remaining -= 1;
                        return Some(WeightedEdge::new(self.source, head, weight));
                    }
                }
                None
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.remaining, Some(self.remaining))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {}

        let row = self
            .edges
            .get(source as usize)
            .map(|row| row.as_slice())
            .unwrap_or(&[]);

        Box::new(OutEdgeIterator {
            source,
            current_head: 0,
            row,
            remaining: row.iter().flatten().count(),
        })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        *self
            .edges
            .get(edge.tail as usize)?
            .get(edge.head as usize)?
    }

    fn add_edge(&mut self, edge: &WeightedEdge) -> Result<()> {
        validate_edge(edge, self.number_of_vertices())?;
        self.edges[edge.tail as usize][edge.head as usize] = Some(edge.weight);
        self.edges[edge.head as usize][edge.tail as usize] = Some(edge.weight);
        Ok(())
    }
}
