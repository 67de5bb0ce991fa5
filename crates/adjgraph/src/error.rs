#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },
}

impl Error {
    pub(crate) fn vertex_not_found(id: &str) -> Self {
        Self::VertexNotFound { id: id.to_string() }
    }

    pub(crate) fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
