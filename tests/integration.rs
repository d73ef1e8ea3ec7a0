//! End-to-end tests: document parsing, conversion and the full
//! classify -> apply -> analyze -> score pipeline.
mod common;
use common::*;
use kaizen::prelude::*;
use kaizen::rules::RuleId;

const SAMPLE_DOCUMENT: &str = r#"{
    "name": "Бизнес",
    "category": "business",
    "nodes": [
        {
            "id": "lead",
            "label": "Лид",
            "category": "input",
            "emoji": "📩",
            "status": "active"
        },
        {
            "id": "sale",
            "label": "Продажа",
            "category": "process",
            "description": "Продажа клиенту",
            "status": "active",
            "metrics": { "current": 10, "target": 100, "trend": "down", "unit": "шт/день" }
        },
        {
            "id": "cash",
            "label": "Деньги",
            "category": "output",
            "status": "active"
        }
    ],
    "edges": [
        { "source": "lead", "target": "sale", "flowVolume": 60, "flowSpeed": 4 },
        { "source": "sale", "target": "cash", "flowVolume": 20 }
    ],
    "version": 3,
    "updatedAt": "2026-08-20T10:00:00Z"
}"#;

#[test]
fn test_document_parses_camel_case_wire_names() {
    let document = GraphDocument::from_json(SAMPLE_DOCUMENT).unwrap();
    assert_eq!(document.name.as_deref(), Some("Бизнес"));
    assert_eq!(document.version, Some(3));
    assert_eq!(document.updated_at.as_deref(), Some("2026-08-20T10:00:00Z"));
    assert_eq!(document.nodes.len(), 3);
    assert_eq!(document.edges[0].flow_volume, 60.0);
    assert_eq!(document.edges[0].flow_speed, 4.0);
    // Absent flowSpeed defaults to zero.
    assert_eq!(document.edges[1].flow_speed, 0.0);

    let sale = &document.nodes[1];
    assert_eq!(sale.category, NodeCategory::Process);
    assert_eq!(sale.metrics.as_ref().unwrap().target, Some(100.0));
    assert_eq!(sale.metrics.as_ref().unwrap().trend, Trend::Down);
}

#[test]
fn test_document_round_trips_losslessly() {
    let document = GraphDocument::from_json(SAMPLE_DOCUMENT).unwrap();
    let json = document.to_json().unwrap();
    assert!(json.contains("\"flowVolume\""));
    assert!(json.contains("\"updatedAt\""));

    let reparsed = GraphDocument::from_json(&json).unwrap();
    assert_eq!(reparsed.nodes, document.nodes);
    assert_eq!(reparsed.edges, document.edges);
    assert_eq!(reparsed.version, document.version);
}

#[test]
fn test_schema_reference_wire_name() {
    let json = r#"{ "id": "s", "label": "Вложенная", "category": "schema" }"#;
    let node: Node = serde_json::from_str(json).unwrap();
    assert_eq!(node.category, NodeCategory::SchemaRef);
    // The long-form alias is accepted too.
    let json = r#"{ "id": "s", "label": "Вложенная", "category": "schema-reference" }"#;
    let node: Node = serde_json::from_str(json).unwrap();
    assert_eq!(node.category, NodeCategory::SchemaRef);
}

#[test]
fn test_into_graph_accepts_valid_document() {
    let document = GraphDocument::from_json(SAMPLE_DOCUMENT).unwrap();
    let graph = document.into_graph().unwrap();
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);
}

#[test]
fn test_into_graph_rejects_dangling_edge() {
    let mut document = GraphDocument::from_json(SAMPLE_DOCUMENT).unwrap();
    document.edges.push(edge("cash", "ghost", 10.0));
    let err = document.into_graph().unwrap_err();
    assert!(matches!(err, GraphConversionError::DanglingEdge { .. }));
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn test_into_graph_rejects_duplicate_node_ids() {
    let mut document = GraphDocument::from_json(SAMPLE_DOCUMENT).unwrap();
    document.nodes.push(input("lead", "Дубль"));
    let err = document.into_graph().unwrap_err();
    assert!(matches!(err, GraphConversionError::DuplicateNodeId(id) if id == "lead"));
}

struct LabeledList {
    labels: Vec<String>,
}

impl IntoGraph for LabeledList {
    fn into_graph(self) -> Result<GraphData, GraphConversionError> {
        let mut nodes = Vec::new();
        for (i, label) in self.labels.into_iter().enumerate() {
            if label.is_empty() {
                return Err(GraphConversionError::ValidationError(format!(
                    "entry {} has no label",
                    i
                )));
            }
            nodes.push(Node::new(format!("n{}", i), label, NodeCategory::Process));
        }
        let graph = GraphData::new(nodes, vec![]);
        graph.validate()?;
        Ok(graph)
    }
}

#[test]
fn test_custom_format_reports_through_validation_error() {
    let good = LabeledList {
        labels: vec!["Продажа".to_string(), "Работа".to_string()],
    };
    assert_eq!(good.into_graph().unwrap().nodes.len(), 2);

    let bad = LabeledList {
        labels: vec!["Продажа".to_string(), String::new()],
    };
    let err = bad.into_graph().unwrap_err();
    assert!(matches!(err, GraphConversionError::ValidationError(_)));
    assert_eq!(err.to_string(), "Invalid graph data: entry 1 has no label");
}

#[test]
fn test_full_pipeline_on_sample_document() {
    let graph = GraphDocument::from_json(SAMPLE_DOCUMENT)
        .unwrap()
        .into_graph()
        .unwrap();

    // The sale node is far below target: classifier flags it critical.
    let alerts = classify_nodes(&graph.nodes, &graph.edges);
    assert!(
        alerts
            .iter()
            .any(|a| a.node_id == "sale" && a.severity == AlertSeverity::Critical)
    );

    // Status application turns it into a bottleneck for the rule engine.
    let nodes = apply_status(&graph.nodes, &alerts);
    assert_eq!(nodes[1].status, NodeStatus::Bottleneck);

    let findings = analyze(&nodes, &graph.edges);
    let defects = findings
        .iter()
        .find(|f| f.rule_id == RuleId::MudaDefects)
        .unwrap();
    assert_eq!(defects.severity, Severity::Critical);
    assert_eq!(defects.node_ids, vec!["sale".to_string()]);

    // The broken sale node feeds an active cash node: jidoka violation.
    assert!(findings.iter().any(|f| f.rule_id == RuleId::JidokaNoStop));

    let summary = score(&findings);
    assert!(summary.score < 100);
    assert_eq!(
        summary.total,
        summary.passed + summary.criticals + summary.warnings + summary.suggestions
    );

    // Downstream of the bottleneck is blocked, upstream is not.
    let blocked = blocked_node_ids(&nodes, &graph.edges);
    assert!(blocked.contains("sale"));
    assert!(blocked.contains("cash"));
    assert!(!blocked.contains("lead"));
}

#[test]
fn test_finding_serializes_with_camel_case_keys() {
    let findings = analyze(&[], &[]);
    let json = serde_json::to_string(&findings[0]).unwrap();
    assert!(json.contains("\"ruleId\":\"gemba-empty\""));
    assert!(json.contains("\"ruleName\""));
    assert!(json.contains("\"severity\":\"critical\""));
    // Whole-graph findings omit the empty node id list.
    assert!(!json.contains("\"nodeIds\""));
}

#[test]
fn test_alerts_serialize_with_wire_names() {
    let nodes = vec![input("a", "Лид").with_metrics(metrics(10.0, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    let json = serde_json::to_string(&alerts[0]).unwrap();
    assert!(json.contains("\"nodeId\":\"a\""));
    assert!(json.contains("\"kind\":\"bottleneck\""));
    assert!(json.contains("\"severity\":\"critical\""));
}

#[test]
fn test_analysis_runs_are_independent() {
    // No state is carried between invocations: a second run over a changed
    // snapshot sees only the new snapshot.
    let (mut nodes, edges) = balanced_life_nodes();
    let first = analyze(&nodes, &edges);
    assert_eq!(score(&first).score, 100);

    nodes[0].status = NodeStatus::Bottleneck;
    let second = analyze(&nodes, &edges);
    assert!(second.iter().any(|f| f.rule_id == RuleId::MudaDefects
        && f.severity == Severity::Critical));

    nodes[0].status = NodeStatus::Active;
    let third = analyze(&nodes, &edges);
    assert_eq!(first, third);
}
