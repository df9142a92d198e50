use itertools::Itertools;
use rand::{seq::IteratorRandom, Rng};

use crate::{
    error::Result,
    graphs::{Distance, Graph, VertexId},
    search::{
        collections::dijkstra_data::DijkstraData, dijkstra::dijkstra_one_to_all, DistanceHeuristic,
    },
};

/// A set of landmarks whose lower bounds are combined by taking the maximum.
pub struct Landmarks {
    pub landmarks: Vec<Landmark>,
}

impl Landmarks {
    pub fn new(graph: &dyn Graph, vertices: &[VertexId]) -> Result<Landmarks> {
        let landmarks = vertices
            .iter()
            .map(|&vertex| Landmark::new(graph, vertex))
            .collect::<Result<Vec<_>>>()?;

        Ok(Landmarks { landmarks })
    }

    pub fn random<R: Rng>(
        graph: &dyn Graph,
        number_of_landmarks: u32,
        rng: &mut R,
    ) -> Result<Landmarks> {
        let vertices = graph
            .vertices()
            .choose_multiple(rng, number_of_landmarks as usize);
        Landmarks::new(graph, &vertices)
    }

    /// Starts at a random vertex and then repeatedly adds the vertex whose
    /// distance to the closest landmark so far is largest. Unreachable
    /// vertices are never picked, so on a disconnected graph fewer landmarks
    /// than requested may be returned.
    pub fn farthest<R: Rng>(
        graph: &dyn Graph,
        number_of_landmarks: u32,
        rng: &mut R,
    ) -> Result<Landmarks> {
        let mut landmarks: Vec<Landmark> = Vec::new();
        let Some(first) = graph.vertices().choose(rng) else {
            return Ok(Landmarks { landmarks });
        };
        if number_of_landmarks == 0 {
            return Ok(Landmarks { landmarks });
        }
        landmarks.push(Landmark::new(graph, first)?);

        while landmarks.len() < number_of_landmarks as usize {
            // min over Options is None as soon as one landmark cannot reach
            let next = graph
                .vertices()
                .filter_map(|vertex| {
                    landmarks
                        .iter()
                        .map(|landmark| landmark.distance_to[vertex as usize])
                        .min()
                        .flatten()
                        .map(|distance| (distance, vertex))
                })
                .filter(|&(distance, _)| distance > 0)
                .max_by_key(|&(distance, vertex)| (distance, std::cmp::Reverse(vertex)));

            let Some((_, vertex)) = next else {
                break;
            };
            landmarks.push(Landmark::new(graph, vertex)?);
        }

        tracing::debug!(
            landmarks = ?landmarks.iter().map(|landmark| landmark.vertex).collect_vec(),
            "selected farthest landmarks"
        );

        Ok(Landmarks { landmarks })
    }
}

impl DistanceHeuristic for Landmarks {
    fn lower_bound(&self, vertex: VertexId, target: VertexId) -> Distance {
        self.landmarks
            .iter()
            .map(|landmark| landmark.lower_bound(vertex, target))
            .max()
            .unwrap_or(0)
    }
}

/// Distances from one landmark vertex to every other vertex. As the graph is
/// undirected, `|d(l, t) - d(l, v)|` bounds `d(v, t)` from below by the
/// triangle inequality.
pub struct Landmark {
    pub vertex: VertexId,
    pub distance_to: Vec<Option<Distance>>,
}

impl Landmark {
    pub fn new(graph: &dyn Graph, vertex: VertexId) -> Result<Self> {
        let data = dijkstra_one_to_all(graph, vertex)?;
        let distance_to = graph
            .vertices()
            .map(|other| data.get_distance(other))
            .collect_vec();

        Ok(Landmark {
            vertex,
            distance_to,
        })
    }
}

impl DistanceHeuristic for Landmark {
    fn lower_bound(&self, vertex: VertexId, target: VertexId) -> Distance {
        let distance_to_vertex = self.distance_to.get(vertex as usize).copied().flatten();
        let distance_to_target = self.distance_to.get(target as usize).copied().flatten();

        match (distance_to_vertex, distance_to_target) {
            (Some(to_vertex), Some(to_target)) => to_vertex.abs_diff(to_target),
            _ => 0,
        }
    }
}
