use std::ops::Range;

use rand::Rng;

use super::{vec_vec_graph::VecVecGraph, Graph, VertexId, Weight, WeightedEdge};
use crate::error::{GraphError, Result};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Connects every pair of vertices with a weight drawn uniformly from
    /// `weights`. Pairs are generated as `(i, j)` with `i < j` in ascending
    /// order, so the same seeded RNG always gives the same graph.
    pub fn random_complete<R: Rng>(
        number_of_vertices: u32,
        weights: Range<Weight>,
        rng: &mut R,
    ) -> Result<VecVecGraph> {
        Self::random(number_of_vertices, weights, 1.0, rng)
    }

    /// Like [`GraphFactory::random_complete`], but each pair is only connected
    /// with probability `edge_probability`.
    pub fn random<R: Rng>(
        number_of_vertices: u32,
        weights: Range<Weight>,
        edge_probability: f64,
        rng: &mut R,
    ) -> Result<VecVecGraph> {
        if weights.start == 0 || weights.is_empty() {
            return Err(GraphError::InvalidArgument(format!(
                "weight range {:?} must be non-empty and positive",
                weights
            )));
        }
        if !(0.0..=1.0).contains(&edge_probability) {
            return Err(GraphError::InvalidArgument(format!(
                "edge probability {} is not in [0, 1]",
                edge_probability
            )));
        }

        let mut graph = VecVecGraph::new(number_of_vertices);
        for tail in 0..number_of_vertices {
            for head in (tail + 1)..number_of_vertices {
                if !rng.gen_bool(edge_probability) {
                    continue;
                }
                let weight = rng.gen_range(weights.clone());
                graph.add_edge(&WeightedEdge::new(tail, head, weight))?;
            }
        }

        tracing::debug!(
            vertices = number_of_vertices,
            edges = graph.number_of_edges(),
            "generated random graph"
        );

        Ok(graph)
    }

    /// A path `0 - 1 - ... - (n-1)` where every edge has the same weight.
    pub fn line(number_of_vertices: u32, weight: Weight) -> Result<VecVecGraph> {
        let edges: Vec<_> = (1..number_of_vertices)
            .map(|head: VertexId| WeightedEdge::new(head - 1, head, weight))
            .collect();
        VecVecGraph::from_edges(number_of_vertices, &edges)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::graphs::all_edges;

    #[test]
    fn random_complete_is_reproducible() {
        let first =
            GraphFactory::random_complete(6, 100..500, &mut StdRng::seed_from_u64(7)).unwrap();
        let second =
            GraphFactory::random_complete(6, 100..500, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first.number_of_edges(), 15);
        assert_eq!(all_edges(&first), all_edges(&second));
        assert!(all_edges(&first)
            .iter()
            .all(|edge| (100..500).contains(&edge.weight)));
    }

    #[test]
    fn zero_weights_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(GraphFactory::random_complete(3, 0..10, &mut rng).is_err());
        assert!(GraphFactory::random(3, 1..10, 1.5, &mut rng).is_err());
    }

    #[test]
    fn line_graph() {
        let graph = GraphFactory::line(4, 3).unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(GraphFactory::line(0, 3).unwrap().number_of_vertices(), 0);
    }
}
