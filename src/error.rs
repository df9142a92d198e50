use thiserror::Error;

use crate::graphs::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub fn vertex_out_of_range(vertex: VertexId, number_of_vertices: u32) -> GraphError {
        GraphError::InvalidArgument(format!(
            "vertex {} is out of range for a graph with {} vertices",
            vertex, number_of_vertices
        ))
    }
}
