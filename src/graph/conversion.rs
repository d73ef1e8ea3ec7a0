use super::model::GraphData;
use crate::error::GraphConversionError;
use ahash::AHashSet;

/// A trait for custom data models that can be converted into a `GraphData`.
///
/// This is the primary extension point for making the engine format-agnostic.
/// Implement it on your own persistence/editor structs to provide a
/// translation layer into the canonical graph model. Structural validation
/// (dangling edges, duplicate ids) belongs here, at the boundary; the
/// analysis passes themselves trust their input and never validate.
///
/// # Example
///
/// ```rust
/// use kaizen::prelude::*;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyBlock { id: String, title: String }
/// struct MyBoard { blocks: Vec<MyBlock> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyBoard {
///     fn into_graph(self) -> Result<GraphData, GraphConversionError> {
///         let mut nodes = Vec::new();
///         for block in self.blocks {
///             // Format-level checks report through the catch-all variant.
///             if block.title.is_empty() {
///                 return Err(GraphConversionError::ValidationError(format!(
///                     "block '{}' has no title",
///                     block.id
///                 )));
///             }
///             nodes.push(Node::new(block.id, block.title, NodeCategory::Process));
///         }
///
///         let graph = GraphData::new(nodes, vec![]);
///         graph.validate()?;
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into an analysis-ready graph.
    fn into_graph(self) -> Result<GraphData, GraphConversionError>;
}

impl GraphData {
    /// Checks the caller-side invariants: unique node ids and no edge
    /// referencing a node that does not exist.
    pub fn validate(&self) -> Result<(), GraphConversionError> {
        let mut ids: AHashSet<&str> = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(&node.id) {
                return Err(GraphConversionError::DuplicateNodeId(node.id.clone()));
            }
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphConversionError::DanglingEdge {
                        edge_source: edge.source.clone(),
                        target: edge.target.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
