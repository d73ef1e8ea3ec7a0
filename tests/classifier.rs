//! Tests for the status/bottleneck classifier.
mod common;
use common::*;
use kaizen::prelude::*;

#[test]
fn test_target_shortfall_is_critical_below_half() {
    let nodes = vec![input("a", "Лид").with_metrics(metrics(10.0, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Bottleneck);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert!(alerts[0].message.contains("10 из 100"));
}

#[test]
fn test_target_shortfall_is_warning_below_three_quarters() {
    let nodes = vec![input("a", "Лид").with_metrics(metrics(60.0, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Warning);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
}

#[test]
fn test_target_met_produces_no_alert() {
    // 80 >= 0.75 * 100, nothing to report.
    let nodes = vec![input("a", "Лид").with_metrics(metrics(80.0, 100.0))];
    assert!(classify_nodes(&nodes, &[]).is_empty());
}

#[test]
fn test_threshold_is_strict() {
    // Exactly half the target is not "below half": falls into the warning tier.
    let nodes = vec![input("a", "Лид").with_metrics(metrics(50.0, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
}

#[test]
fn test_fractional_metrics_keep_their_fraction() {
    // Integers render bare, fractional values keep the decimal part.
    let nodes = vec![input("a", "Лид").with_metrics(metrics(12.5, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    assert!(alerts[0].message.contains("12.5 из 100"));
}

#[test]
fn test_metrics_without_target_are_ignored() {
    let mut node = input("a", "Лид");
    node.metrics = Some(Metrics {
        current: 1.0,
        target: None,
        trend: Trend::Down,
        unit: "шт".to_string(),
    });
    assert!(classify_nodes(&[node], &[]).is_empty());
}

#[test]
fn test_flow_imbalance_cites_rounded_ratio() {
    let nodes = vec![
        input("a", "Лид"),
        process("b", "Продажа"),
        output("c", "Деньги"),
    ];
    let edges = vec![edge("a", "b", 100.0), edge("b", "c", 40.0)];
    let alerts = classify_nodes(&nodes, &edges);
    // 100 > 2 * 40, ratio 2.5 rounds to 3.
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].node_id, "b");
    assert_eq!(alerts[0].kind, AlertKind::Bottleneck);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    assert!(alerts[0].message.contains("в 3x"));
}

#[test]
fn test_flow_imbalance_within_bounds_is_silent() {
    let nodes = vec![
        input("a", "Лид"),
        process("b", "Продажа"),
        output("c", "Деньги"),
    ];
    let edges = vec![edge("a", "b", 100.0), edge("b", "c", 60.0)];
    // 100 <= 120: no imbalance alert.
    assert!(classify_nodes(&nodes, &edges).is_empty());
}

#[test]
fn test_integration_error_is_critical_down() {
    let node = input("a", "WhatsApp").with_integration(Integration {
        kind: "whatsapp".to_string(),
        status: IntegrationStatus::Error,
        last_sync: None,
    });
    let alerts = classify_nodes(&[node], &[]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Down);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert!(alerts[0].message.contains("whatsapp"));
}

#[test]
fn test_process_dead_end_and_orphan_are_info() {
    let nodes = vec![process("a", "Работа")];
    let alerts = classify_nodes(&nodes, &[]);
    // No input and no output: both process rules fire as info.
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.severity == AlertSeverity::Info));
    assert!(alerts.iter().all(|a| a.kind == AlertKind::Warning));
    assert!(alerts.iter().any(|a| a.message.contains("без выхода")));
    assert!(alerts.iter().any(|a| a.message.contains("без входа")));
}

#[test]
fn test_non_process_categories_skip_structural_rules() {
    let nodes = vec![input("a", "Лид"), output("b", "Деньги")];
    assert!(classify_nodes(&nodes, &[]).is_empty());
}

#[test]
fn test_one_node_can_trigger_multiple_alerts() {
    let nodes = vec![process("a", "Продажа").with_metrics(metrics(10.0, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    // Target shortfall plus dead-end plus orphan.
    assert_eq!(alerts.len(), 3);
}

#[test]
fn test_apply_status_precedence() {
    let nodes = vec![
        process("crit", "Продажа").with_metrics(metrics(10.0, 100.0)),
        input("warn", "Лид").with_metrics(metrics(60.0, 100.0)),
        input("fine", "Трафик"),
    ];
    let edges = vec![
        edge("warn", "crit", 50.0),
        edge("fine", "crit", 50.0),
        edge("crit", "warn", 50.0),
    ];
    let alerts = classify_nodes(&nodes, &edges);
    let updated = apply_status(&nodes, &alerts);

    assert_eq!(updated[0].status, NodeStatus::Bottleneck);
    assert_eq!(updated[1].status, NodeStatus::Warning);
    assert_eq!(updated[2].status, NodeStatus::Active);
    // Input is untouched.
    assert!(nodes.iter().all(|n| n.status == NodeStatus::Active));
}

#[test]
fn test_classify_does_not_mutate_input() {
    let (nodes, edges) = funnel_with_feedback();
    let nodes_before = nodes.clone();
    let edges_before = edges.clone();
    let _ = classify_nodes(&nodes, &edges);
    assert_eq!(nodes, nodes_before);
    assert_eq!(edges, edges_before);
}

#[test]
fn test_blocked_nodes_propagate_downstream() {
    let nodes = vec![
        process("a", "Сломан").with_status(NodeStatus::Bottleneck),
        process("b", "Зависит"),
        process("c", "Дальше"),
        process("d", "Отдельно"),
    ];
    let edges = vec![edge("a", "b", 10.0), edge("b", "c", 10.0)];
    let blocked = blocked_node_ids(&nodes, &edges);
    assert!(blocked.contains("a"));
    assert!(blocked.contains("b"));
    assert!(blocked.contains("c"));
    assert!(!blocked.contains("d"));
}

#[test]
fn test_inactive_nodes_also_block() {
    let nodes = vec![
        process("a", "Выключен").with_status(NodeStatus::Inactive),
        process("b", "Зависит"),
    ];
    let edges = vec![edge("a", "b", 10.0)];
    let blocked = blocked_node_ids(&nodes, &edges);
    assert_eq!(blocked.len(), 2);
}

#[test]
fn test_no_failing_nodes_means_nothing_blocked() {
    let (nodes, edges) = funnel_with_feedback();
    assert!(blocked_node_ids(&nodes, &edges).is_empty());
}

#[test]
fn test_alert_records_carry_ids_and_timestamp() {
    let nodes = vec![input("a", "Лид").with_metrics(metrics(10.0, 100.0))];
    let alerts = classify_nodes(&nodes, &[]);
    let records = alert_records("g1", &alerts, "2026-08-25T00:00:00Z");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "alert-g1-a-bottleneck");
    assert_eq!(records[0].graph_id, "g1");
    assert_eq!(records[0].created_at, "2026-08-25T00:00:00Z");
    assert!(!records[0].resolved);
}
