//! Remediation prompt templating.
//!
//! A prompt is a ready-to-paste instruction for an external text assistant.
//! Rules with domain-specific wording set their prompt at emit time; every
//! other non-pass finding gets one generated from the shared template here.

use super::finding::{Finding, Severity};
use crate::graph::Node;
use itertools::Itertools;

/// Builds the generic remediation prompt for one finding: problem statement,
/// affected node labels (resolved from ids) and the suggested fix.
pub fn generate_prompt(finding: &Finding, nodes: &[Node]) -> String {
    let node_names = finding
        .node_ids
        .iter()
        .map(|id| match nodes.iter().find(|n| n.id == *id) {
            Some(node) => format!("\"{}\"", node.label),
            None => id.clone(),
        })
        .join(", ");

    let mut prompt = String::from("Кайдзен-анализ нашёл проблему в моей Life Factory схеме.");
    prompt.push_str(&format!(
        "\nПроблема: {} — {}",
        finding.rule_name, finding.message
    ));
    if !node_names.is_empty() {
        prompt.push_str(&format!("\nЗатронутые блоки: {}", node_names));
    }
    if let Some(suggestion) = &finding.suggestion {
        prompt.push_str(&format!("\nРекомендация: {}", suggestion));
    }
    prompt.push_str("\n\nИсправь эту проблему в моей схеме.");
    prompt
}

/// Fills in a generated prompt on every non-pass finding that does not
/// already carry a rule-specific one.
pub fn fill_prompts(findings: &mut [Finding], nodes: &[Node]) {
    for finding in findings.iter_mut() {
        if finding.prompt.is_none() && finding.severity != Severity::Pass {
            finding.prompt = Some(generate_prompt(finding, nodes));
        }
    }
}

/// Joins the prompts of all non-pass findings into one aggregate
/// instruction, for the "copy all" action.
pub fn combined_prompt(findings: &[Finding]) -> String {
    findings
        .iter()
        .filter(|f| f.severity != Severity::Pass)
        .filter_map(|f| f.prompt.as_deref())
        .join("\n\n---\n\n")
}
