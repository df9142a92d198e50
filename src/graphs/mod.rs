use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

pub mod graph_factory;
pub mod matrix_graph;
pub mod vec_vec_graph;

pub type VertexId = u32;
pub type Weight = u32;

/// Cost of a path. Wider than [`Weight`] so that summing the weights of a
/// simple path can never overflow.
pub type Distance = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: VertexId,
    pub head: VertexId,
}

impl Edge {
    pub fn reversed(&self) -> Edge {
        Edge {
            tail: self.head,
            head: self.tail,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_weight(&self) -> Edge {
        Edge {
            tail: self.tail,
            head: self.head,
        }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

/// An undirected, positively weighted graph with a fixed number of vertices.
///
/// Every edge is stored in both directions, so `edges(v)` yields all
/// neighbors of `v` and `get_weight` is symmetric.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Number of undirected edges.
    fn number_of_edges(&self) -> u32 {
        let directed = (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>();
        directed / 2
    }

    fn edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn get_weight(&self, edge: &Edge) -> Option<Weight>;

    /// Inserts or replaces the undirected edge `tail <-> head`.
    fn add_edge(&mut self, edge: &WeightedEdge) -> Result<()>;

    fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.number_of_vertices()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.number_of_vertices() {
            return Err(GraphError::vertex_out_of_range(
                vertex,
                self.number_of_vertices(),
            ));
        }
        Ok(())
    }
}

/// Rejects self loops, zero weights and endpoints outside `[0, n)`.
pub fn validate_edge(edge: &WeightedEdge, number_of_vertices: u32) -> Result<()> {
    if edge.tail >= number_of_vertices {
        return Err(GraphError::vertex_out_of_range(edge.tail, number_of_vertices));
    }
    if edge.head >= number_of_vertices {
        return Err(GraphError::vertex_out_of_range(edge.head, number_of_vertices));
    }
    if edge.tail == edge.head {
        return Err(GraphError::InvalidArgument(format!(
            "self loop on vertex {}",
            edge.tail
        )));
    }
    if edge.weight == 0 {
        return Err(GraphError::InvalidArgument(format!(
            "edge {} <-> {} must have a positive weight",
            edge.tail, edge.head
        )));
    }
    Ok(())
}

/// Returns every undirected edge once, with `tail < head`.
pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph
        .vertices()
        .flat_map(|vertex| graph.edges(vertex))
        .filter(|edge| edge.tail < edge.head)
        .collect()
}

pub fn is_bidirectional(graph: &dyn Graph) -> bool {
    graph.vertices().all(|vertex| {
        graph.edges(vertex).all(|edge| {
            graph.get_weight(&edge.remove_weight().reversed()) == Some(edge.weight)
        })
    })
}
