//! The status/bottleneck classifier: per-node operational health checks.
//!
//! Every rule is evaluated independently per node, so a single node may
//! trigger several alerts. The classifier never mutates its input; deriving
//! the final node status from the alerts is the caller's step (see
//! [`apply_status`]).

use crate::fmt::fmt_num;
use crate::graph::{Edge, IntegrationStatus, Node, NodeCategory, NodeStatus};
use crate::topology;
use ahash::AHashSet;

mod alert;

pub use alert::{AlertKind, AlertRecord, AlertSeverity, NodeAlert, alert_records};

/// Inspects every node for bottleneck signals and returns the alert list.
///
/// Rules, each independent:
/// 1. metrics far below target (strict `< 0.5 * target` critical,
///    `< 0.75 * target` warning);
/// 2. incoming flow volume more than double the outgoing;
/// 3. integration in `error` state;
/// 4. process without outgoing edges (dead end);
/// 5. process without incoming edges (orphan).
pub fn classify_nodes(nodes: &[Node], edges: &[Edge]) -> Vec<NodeAlert> {
    let mut results = Vec::new();

    for node in nodes {
        // 1. Metrics significantly below target.
        if let Some(metrics) = &node.metrics {
            if let Some(target) = metrics.target.filter(|t| *t != 0.0) {
                if metrics.current < target * 0.5 {
                    results.push(NodeAlert {
                        node_id: node.id.clone(),
                        kind: AlertKind::Bottleneck,
                        message: format!(
                            "«{}»: {} из {} {}",
                            node.label,
                            fmt_num(metrics.current),
                            fmt_num(target),
                            metrics.unit
                        ),
                        severity: AlertSeverity::Critical,
                    });
                } else if metrics.current < target * 0.75 {
                    results.push(NodeAlert {
                        node_id: node.id.clone(),
                        kind: AlertKind::Warning,
                        message: format!(
                            "«{}» отстаёт: {}/{} {}",
                            node.label,
                            fmt_num(metrics.current),
                            fmt_num(target),
                            metrics.unit
                        ),
                        severity: AlertSeverity::Warning,
                    });
                }
            }
        }

        // 2. Incoming flow volume far above the outgoing: poor conversion.
        let incoming = topology::incoming_edges(&node.id, edges);
        let outgoing = topology::outgoing_edges(&node.id, edges);

        if !incoming.is_empty() && !outgoing.is_empty() {
            let in_vol: f64 = incoming.iter().map(|e| e.flow_volume).sum();
            let out_vol: f64 = outgoing.iter().map(|e| e.flow_volume).sum();

            if out_vol > 0.0 && in_vol > out_vol * 2.0 {
                results.push(NodeAlert {
                    node_id: node.id.clone(),
                    kind: AlertKind::Bottleneck,
                    message: format!(
                        "«{}»: входящий поток ({}) в {}x больше исходящего ({})",
                        node.label,
                        fmt_num(in_vol),
                        fmt_num((in_vol / out_vol).round()),
                        fmt_num(out_vol)
                    ),
                    severity: AlertSeverity::Warning,
                });
            }
        }

        // 3. Integration in error state.
        if let Some(integration) = &node.integration {
            if integration.status == IntegrationStatus::Error {
                results.push(NodeAlert {
                    node_id: node.id.clone(),
                    kind: AlertKind::Down,
                    message: format!(
                        "«{}»: интеграция {} не работает",
                        node.label, integration.kind
                    ),
                    severity: AlertSeverity::Critical,
                });
            }
        }

        // 4. Process with no outgoing edges: a dead end.
        if node.category == NodeCategory::Process && outgoing.is_empty() {
            results.push(NodeAlert {
                node_id: node.id.clone(),
                kind: AlertKind::Warning,
                message: format!("«{}»: процесс без выхода (тупик)", node.label),
                severity: AlertSeverity::Info,
            });
        }

        // 5. Process with no incoming edges: not wired up.
        if node.category == NodeCategory::Process && incoming.is_empty() {
            results.push(NodeAlert {
                node_id: node.id.clone(),
                kind: AlertKind::Warning,
                message: format!("«{}»: процесс без входа", node.label),
                severity: AlertSeverity::Info,
            });
        }
    }

    results
}

/// Returns a fresh node list with the status each alert level implies:
/// any critical alert makes a node a bottleneck, else any warning-severity
/// alert marks it warning, else it is active. `Inactive` is a manual state
/// and is overwritten here on re-analysis as well.
pub fn apply_status(nodes: &[Node], results: &[NodeAlert]) -> Vec<Node> {
    let mut critical_ids: AHashSet<&str> = AHashSet::new();
    let mut warning_ids: AHashSet<&str> = AHashSet::new();
    for r in results {
        match r.severity {
            AlertSeverity::Critical => {
                critical_ids.insert(&r.node_id);
            }
            AlertSeverity::Warning => {
                warning_ids.insert(&r.node_id);
            }
            AlertSeverity::Info => {}
        }
    }

    nodes
        .iter()
        .map(|node| {
            let new_status = if critical_ids.contains(node.id.as_str()) {
                NodeStatus::Bottleneck
            } else if warning_ids.contains(node.id.as_str()) {
                NodeStatus::Warning
            } else {
                NodeStatus::Active
            };

            let mut updated = node.clone();
            updated.status = new_status;
            updated
        })
        .collect()
}

/// The set of node ids whose outgoing flow is blocked: nodes that are
/// themselves bottleneck/inactive plus everything downstream of them.
/// Consumed by the rendering layer to stop flow animation on dimmed edges.
pub fn blocked_node_ids(nodes: &[Node], edges: &[Edge]) -> AHashSet<String> {
    let seeds: Vec<&str> = nodes
        .iter()
        .filter(|n| matches!(n.status, NodeStatus::Bottleneck | NodeStatus::Inactive))
        .map(|n| n.id.as_str())
        .collect();

    if seeds.is_empty() {
        return AHashSet::new();
    }
    topology::reachable_from(seeds, edges)
}
