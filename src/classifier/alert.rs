use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of fault an alert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Bottleneck,
    Down,
    Warning,
    Opportunity,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertKind::Bottleneck => "bottleneck",
            AlertKind::Down => "down",
            AlertKind::Warning => "warning",
            AlertKind::Opportunity => "opportunity",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

/// One per-node diagnostic produced by the classifier. A node may carry
/// several alerts; the caller reduces them to a single displayed status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAlert {
    pub node_id: String,
    pub kind: AlertKind,
    pub message: String,
    pub severity: AlertSeverity,
}

/// An alert as persisted in the caller's global alert list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: String,
    pub graph_id: String,
    pub node_id: String,
    pub kind: AlertKind,
    pub message: String,
    pub severity: AlertSeverity,
    pub created_at: String,
    pub resolved: bool,
}

/// Converts classifier output into alert records for the given graph.
/// The timestamp is supplied by the caller so the core stays clock-free.
pub fn alert_records(graph_id: &str, results: &[NodeAlert], created_at: &str) -> Vec<AlertRecord> {
    results
        .iter()
        .map(|r| AlertRecord {
            id: format!("alert-{}-{}-{}", graph_id, r.node_id, r.kind),
            graph_id: graph_id.to_string(),
            node_id: r.node_id.clone(),
            kind: r.kind,
            message: r.message.clone(),
            severity: r.severity,
            created_at: created_at.to_string(),
            resolved: false,
        })
        .collect()
}
