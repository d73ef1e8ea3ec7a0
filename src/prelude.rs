//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the kaizen
//! crate. Import this module to get the core functionality without having
//! to import each item individually.

// Graph data model
pub use crate::graph::{
    Edge, GraphData, GraphDocument, Integration, IntegrationStatus, IntoGraph, Metrics, Node,
    NodeCategory, NodeStatus, Trend,
};

// Status/bottleneck classifier
pub use crate::classifier::{
    AlertKind, AlertRecord, AlertSeverity, NodeAlert, alert_records, apply_status,
    blocked_node_ids, classify_nodes,
};

// Kaizen rule engine and scoring
pub use crate::rules::{
    Category, Finding, RuleId, ScoreSummary, Severity, analyze, combined_prompt, filter_findings,
    score, sort_by_severity,
};

// Topology helpers
pub use crate::topology::{incoming_edges, is_isolated, outgoing_edges, reachable_from};

// Error types
pub use crate::error::{DocumentError, GraphConversionError};
