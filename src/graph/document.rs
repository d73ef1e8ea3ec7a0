use super::conversion::IntoGraph;
use super::model::{Edge, GraphData, Node};
use crate::error::{DocumentError, GraphConversionError};
use serde::{Deserialize, Serialize};
use std::fs;

/// A persisted graph document, matching the JSON shape the storage layer
/// round-trips (`nodes`, `edges`, `version`, `updatedAt`, ...).
///
/// The engine does not own this contract — persistence does — but it must be
/// able to consume and produce it losslessly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl GraphDocument {
    /// Load a graph document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a graph document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl IntoGraph for GraphDocument {
    fn into_graph(self) -> Result<GraphData, GraphConversionError> {
        let graph = GraphData::new(self.nodes, self.edges);
        graph.validate()?;
        Ok(graph)
    }
}
