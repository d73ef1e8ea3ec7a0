use clap::{Parser, ValueEnum};
use kaizen::prelude::*;
use kaizen::rules::CATEGORY_INFO;
use std::time::Instant;

/// CLI-facing category filter for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryCli {
    Muda,
    #[value(name = "5s")]
    FiveS,
    Pdca,
    Gemba,
    Jidoka,
    Jit,
    Flow,
    Life,
}

impl From<CategoryCli> for Category {
    fn from(value: CategoryCli) -> Self {
        match value {
            CategoryCli::Muda => Category::Muda,
            CategoryCli::FiveS => Category::FiveS,
            CategoryCli::Pdca => Category::Pdca,
            CategoryCli::Gemba => Category::Gemba,
            CategoryCli::Jidoka => Category::Jidoka,
            CategoryCli::Jit => Category::Jit,
            CategoryCli::Flow => Category::Flow,
            CategoryCli::Life => Category::Life,
        }
    }
}

/// A rule-based diagnostic engine CLI for process graph documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph document JSON file
    graph_path: String,

    /// Only show findings of this category
    #[arg(short, long, value_enum)]
    category: Option<CategoryCli>,

    /// Hide passed checks from the report
    #[arg(long)]
    hide_passed: bool,

    /// Print the aggregated remediation prompt instead of the report
    #[arg(long)]
    prompt: bool,

    /// Emit the full analysis as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    let document = GraphDocument::from_file(&cli.graph_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let name = document.name.clone().unwrap_or_else(|| cli.graph_path.clone());
    let graph = document
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid graph document: {}", e)));

    // Status pass first, so the rule engine sees derived statuses.
    let alerts = classify_nodes(&graph.nodes, &graph.edges);
    let nodes = apply_status(&graph.nodes, &alerts);

    let analyze_start = Instant::now();
    let mut findings = analyze(&nodes, &graph.edges);
    sort_by_severity(&mut findings);
    let analyze_duration = analyze_start.elapsed();

    let summary = score(&findings);
    let visible = filter_findings(&findings, cli.category.map(Into::into), cli.hide_passed);

    if cli.prompt {
        let prompts: Vec<Finding> = visible.into_iter().cloned().collect();
        println!("{}", combined_prompt(&prompts));
        return;
    }

    if cli.json {
        let report = serde_json::json!({
            "name": name,
            "score": summary,
            "alerts": alerts,
            "findings": visible,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()))
        );
        return;
    }

    println!("\nKaizen report for '{}'", name);
    println!(
        "Nodes: {}, edges: {}, node alerts: {}",
        nodes.len(),
        graph.edges.len(),
        alerts.len()
    );
    println!(
        "Health score: {}/100 ({} critical, {} warning, {} suggestion, {} passed)",
        summary.score, summary.criticals, summary.warnings, summary.suggestions, summary.passed
    );

    for finding in visible {
        let info = CATEGORY_INFO
            .iter()
            .find(|i| i.category == finding.category);
        let tag = info.map_or("", |i| i.jp);
        println!(
            "\n[{}] {} {} ({})",
            finding.severity, tag, finding.rule_name, finding.rule_id
        );
        println!("  {}", finding.message);
        if let Some(suggestion) = &finding.suggestion {
            println!("  -> {}", suggestion);
        }
    }

    println!("\nAnalysis took {:?} (total {:?})", analyze_duration, total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
