use thiserror::Error;

/// Errors that can occur when converting a custom user format into a `GraphData`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    /// Catch-all for format-level failures in custom `IntoGraph` impls.
    #[error("Invalid graph data: {0}")]
    ValidationError(String),

    #[error("Edge '{edge_source}' -> '{target}' references unknown node '{missing_node_id}'")]
    DanglingEdge {
        edge_source: String,
        target: String,
        missing_node_id: String,
    },

    #[error("Duplicate node id '{0}'")]
    DuplicateNodeId(String),
}

/// Errors that can occur when loading or serializing a persisted graph document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read graph document '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse graph document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
