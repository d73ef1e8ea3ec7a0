use clap::Parser;
use kaizen::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate demo graph documents for the kaizen analyzer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of nodes to generate
    #[arg(long, default_value_t = 12)]
    nodes: usize,

    /// Extra random edges on top of the main chain
    #[arg(long, default_value_t = 4)]
    extra_edges: usize,
}

const PRESETS: [(&str, NodeCategory); 12] = [
    ("Лид", NodeCategory::Input),
    ("Трафик", NodeCategory::Input),
    ("Продажа", NodeCategory::Process),
    ("Переговоры", NodeCategory::Process),
    ("Работа", NodeCategory::Process),
    ("Маркетинг", NodeCategory::Process),
    ("Деньги", NodeCategory::Output),
    ("Продукт", NodeCategory::Output),
    ("Тренировка", NodeCategory::Process),
    ("Сон", NodeCategory::Process),
    ("Обучение", NodeCategory::Process),
    ("Семья", NodeCategory::Process),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating demo graph ({} nodes, {} extra edges)...",
        cli.nodes, cli.extra_edges
    );

    let nodes: Vec<Node> = (0..cli.nodes)
        .map(|i| {
            let (label, category) = PRESETS[i % PRESETS.len()];
            let mut node = Node::new(format!("node-{}", i), label, category);
            if rng.random_bool(0.5) {
                node = node.with_metrics(random_metrics(&mut rng));
            }
            if rng.random_bool(0.3) {
                node = node.with_description(format!("Цель блока «{}»", label));
            }
            node
        })
        .collect();

    // A forward chain keeps most nodes connected; extra edges add fan-in.
    let mut edges: Vec<Edge> = (1..cli.nodes)
        .map(|i| {
            Edge::new(
                format!("node-{}", i - 1),
                format!("node-{}", i),
                rng.random_range(10.0..90.0),
            )
            .with_speed(rng.random_range(1.0..8.0))
        })
        .collect();
    for _ in 0..cli.extra_edges {
        if cli.nodes < 2 {
            break;
        }
        let source = rng.random_range(0..cli.nodes);
        let target = rng.random_range(0..cli.nodes);
        if source == target {
            continue;
        }
        edges.push(Edge::new(
            format!("node-{}", source),
            format!("node-{}", target),
            rng.random_range(10.0..90.0),
        ));
    }

    let document = GraphDocument {
        name: Some("Demo graph".to_string()),
        nodes,
        edges,
        version: Some(1),
        ..Default::default()
    };

    fs::write(&cli.output, document.to_json()?)?;
    println!("Successfully generated and saved demo graph to '{}'", cli.output);
    Ok(())
}

fn random_metrics(rng: &mut ThreadRng) -> Metrics {
    let target = rng.random_range(20.0_f64..100.0).round();
    Metrics {
        current: (target * rng.random_range(0.2..1.2)).round(),
        target: Some(target),
        trend: Trend::Stable,
        unit: "шт/день".to_string(),
    }
}
