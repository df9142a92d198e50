use crate::graphs::VertexId;

pub trait VertexExpandedData {
    /// Marks the vertex as expanded and returns whether it already was.
    fn expand(&mut self, vertex: VertexId) -> bool;

    fn is_expanded(&self, vertex: VertexId) -> bool;

    fn clear(&mut self);
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices as usize],
        }
    }

    pub fn number_of_expanded(&self) -> u32 {
        self.expanded.iter().filter(|&&expanded| expanded).count() as u32
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: VertexId) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded[vertex as usize]
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
    }
}
