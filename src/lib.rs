//! # Kaizen - Graph Diagnostic Engine
//!
//! **Kaizen** is a rule-based advisory engine for directed process graphs
//! (nodes = activities, edges = flows). It inspects a graph snapshot and
//! surfaces structural problems (bottlenecks, isolated nodes, missing life
//! domains) as categorized, severity-ranked findings with ready-to-use
//! remediation prompts.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic: it operates on a canonical in-memory
//! [`graph::GraphData`] model. The primary workflow is:
//!
//! 1. **Load Your Data**: Parse your own graph format (or a persisted
//!    [`graph::GraphDocument`] JSON) into Rust structs.
//! 2. **Convert**: Implement [`graph::IntoGraph`] for your structs to
//!    translate them into `GraphData`; validation of caller-side invariants
//!    (dangling edges, duplicate ids) happens at this boundary.
//! 3. **Classify**: Run [`classifier::classify_nodes`] to get per-node
//!    alerts, then [`classifier::apply_status`] to derive displayed statuses.
//! 4. **Analyze**: Run [`rules::analyze`] for the full kaizen finding list,
//!    and [`rules::score`] to reduce it to a health score.
//!
//! Both passes are pure functions of `(nodes, edges)`: same snapshot in,
//! same findings out, input never mutated. Invoke them as often as you like
//! (e.g. on every edit); any debouncing is the caller's concern.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaizen::prelude::*;
//!
//! let nodes = vec![
//!     Node::new("lead", "Лид", NodeCategory::Input),
//!     Node::new("sale", "Продажа", NodeCategory::Process),
//!     Node::new("cash", "Деньги", NodeCategory::Output),
//! ];
//! let edges = vec![
//!     Edge::new("lead", "sale", 60.0),
//!     Edge::new("sale", "cash", 40.0),
//! ];
//!
//! // Per-node operational status.
//! let alerts = classify_nodes(&nodes, &edges);
//! let nodes = apply_status(&nodes, &alerts);
//!
//! // Whole-graph kaizen scan.
//! let mut findings = analyze(&nodes, &edges);
//! sort_by_severity(&mut findings);
//!
//! let summary = score(&findings);
//! println!("Health score: {}/100", summary.score);
//! for finding in &findings {
//!     println!("[{}] {}: {}", finding.severity, finding.rule_id, finding.message);
//! }
//! ```

pub mod classifier;
pub mod error;
mod fmt;
pub mod graph;
pub mod prelude;
pub mod rules;
pub mod topology;
