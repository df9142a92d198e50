use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Distance, VertexId};

/// A priority queue of vertices keyed by a distance, used as the frontier of
/// Dijkstra and A*. Implementations do not need a decrease key operation;
/// stale entries are skipped by the caller.
pub trait VertexDistanceQueue {
    fn clear(&mut self);

    fn insert(&mut self, vertex: VertexId, key: Distance);

    /// Removes the vertex with the smallest key. Equal keys are popped in
    /// ascending vertex order.
    fn pop(&mut self) -> Option<VertexId>;

    fn is_empty(&self) -> bool;
}

#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, VertexId)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: VertexId, key: Distance) {
        self.heap.push(Reverse((key, vertex)));
    }

    fn pop(&mut self) -> Option<VertexId> {
        let Reverse((_key, vertex)) = self.heap.pop()?;
        Some(vertex)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_pop_lowest_vertex_first() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(5, 10);
        queue.insert(2, 10);
        queue.insert(7, 3);

        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
