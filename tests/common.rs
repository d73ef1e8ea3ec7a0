//! Common test utilities for building graph snapshots.
use kaizen::prelude::*;

#[allow(dead_code)]
pub fn process(id: &str, label: &str) -> Node {
    Node::new(id, label, NodeCategory::Process)
}

#[allow(dead_code)]
pub fn input(id: &str, label: &str) -> Node {
    Node::new(id, label, NodeCategory::Input)
}

#[allow(dead_code)]
pub fn output(id: &str, label: &str) -> Node {
    Node::new(id, label, NodeCategory::Output)
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str, flow_volume: f64) -> Edge {
    Edge::new(source, target, flow_volume)
}

#[allow(dead_code)]
pub fn metrics(current: f64, target: f64) -> Metrics {
    Metrics {
        current,
        target: Some(target),
        trend: Trend::Stable,
        unit: "лидов/день".to_string(),
    }
}

/// A small business funnel: lead -> sale -> money, plus a feedback edge
/// from money back to lead.
#[allow(dead_code)]
pub fn funnel_with_feedback() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        input("lead", "Лид").with_description("Входящие лиды"),
        process("sale", "Продажа").with_description("Продажа клиенту"),
        process("work", "Работа").with_description("Выполнение заказа"),
        output("cash", "Деньги").with_description("Выручка"),
    ];
    let edges = vec![
        edge("lead", "sale", 50.0),
        edge("sale", "work", 40.0),
        edge("work", "cash", 40.0),
        edge("cash", "lead", 10.0),
    ];
    (nodes, edges)
}

/// Nodes whose labels cover all six life domains, wired in a chain with a
/// feedback edge so no structural rule fires.
#[allow(dead_code)]
pub fn balanced_life_nodes() -> (Vec<Node>, Vec<Edge>) {
    let labels = [
        ("health", "Здоровье"),
        ("family", "Семья"),
        ("money", "Финансы"),
        ("skills", "Навыки"),
        ("rest", "Отдых"),
        ("routine", "Рутина"),
    ];
    let nodes: Vec<Node> = labels
        .iter()
        .map(|(id, label)| {
            process(id, label)
                .with_description(format!("Блок «{}»", label))
                .with_metrics(metrics(90.0, 100.0))
        })
        .collect();

    let mut edges: Vec<Edge> = labels
        .windows(2)
        .map(|pair| edge(pair[0].0, pair[1].0, 50.0))
        .collect();
    // Feedback: last domain loops back to the first.
    edges.push(edge("routine", "health", 50.0));
    (nodes, edges)
}
