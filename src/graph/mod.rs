//! The node/edge/metric data model and its persistence-facing contracts.

mod conversion;
mod document;
mod model;

pub use conversion::IntoGraph;
pub use document::GraphDocument;
pub use model::{
    Edge, GraphData, Integration, IntegrationStatus, Metrics, Node, NodeCategory, NodeStatus,
    Trend,
};
