use serde::{Deserialize, Serialize};

use crate::{
    graphs::{Distance, VertexId},
    search::path::Path,
};

/// Read access to the result of a single source search.
pub trait DijkstraData {
    fn source(&self) -> VertexId;

    fn number_of_vertices(&self) -> u32;

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    /// Distance from the source, `None` if the vertex was not reached.
    fn get_distance(&self, vertex: VertexId) -> Option<Distance>;

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// Traces back from the target using the predecessors until the source is
    /// reached. Returns `None` if the target is unreached or the chain of
    /// predecessors does not lead back to the source.
    fn get_path(&self, target: VertexId) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source() {
            // A chain longer than the number of vertices must contain a loop.
            if vertices.len() > self.number_of_vertices() as usize {
                return None;
            }
            current = self.get_predecessor(current)?;
            vertices.push(current);
        }

        vertices.reverse();
        Some(Path { vertices, distance })
    }
}

/// Distances and predecessors for every vertex, indexed by vertex id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraDataVec {
    source: VertexId,
    predecessors: Vec<Option<VertexId>>,
    distances: Vec<Option<Distance>>,
}

impl DijkstraDataVec {
    /// Every vertex starts unreached, except the source with distance zero.
    pub fn new(number_of_vertices: u32, source: VertexId) -> Self {
        let mut distances = vec![None; number_of_vertices as usize];
        if let Some(distance) = distances.get_mut(source as usize) {
            *distance = Some(0);
        }

        DijkstraDataVec {
            source,
            predecessors: vec![None; number_of_vertices as usize],
            distances,
        }
    }

    pub fn distances(&self) -> &[Option<Distance>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Sets distance and predecessor of `vertex` if `distance` is an
    /// improvement. Returns whether it was.
    pub(crate) fn relax(&mut self, tail: VertexId, head: VertexId, distance: Distance) -> bool {
        let current = &mut self.distances[head as usize];
        if current.map_or(true, |current| distance < current) {
            *current = Some(distance);
            self.predecessors[head as usize] = Some(tail);
            return true;
        }
        false
    }

    /// Forgets the distance of a vertex that was only reached tentatively.
    pub(crate) fn unset(&mut self, vertex: VertexId) {
        self.distances[vertex as usize] = None;
        self.predecessors[vertex as usize] = None;
    }
}

impl DijkstraData for DijkstraDataVec {
    fn source(&self) -> VertexId {
        self.source
    }

    fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        *self.predecessors.get(vertex as usize)?
    }

    fn get_distance(&self, vertex: VertexId) -> Option<Distance> {
        *self.distances.get(vertex as usize)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_predecessors() {
        let mut data = DijkstraDataVec::new(4, 0);
        assert!(data.relax(0, 1, 4));
        assert!(data.relax(1, 2, 6));
        assert!(!data.relax(0, 2, 6));

        assert_eq!(
            data.get_path(2),
            Some(Path {
                vertices: vec![0, 1, 2],
                distance: 6
            })
        );
        assert_eq!(
            data.get_path(0),
            Some(Path {
                vertices: vec![0],
                distance: 0
            })
        );
        assert_eq!(data.get_path(3), None);
        assert_eq!(data.get_path(9), None);
    }

    #[test]
    fn broken_chain_is_no_path() {
        let mut data = DijkstraDataVec::new(3, 0);
        data.relax(1, 2, 5);
        assert_eq!(data.get_path(2), None);
    }
}
