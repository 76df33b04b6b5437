use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::{Path, PathBuf};

use en_energy::{example_solar_system, hyphal_network_system, HyphalParams, SystemAnalysis};
use en_graph::{load_edge_list, watts_strogatz, Graph};
use en_metrics::{small_world_metrics, SmallWorldMetrics};

#[derive(Parser)]
#[command(name = "en-cli")]
#[command(about = "Energetics CLI - EROEI and small-world network analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the EROEI of an energy system
    Eroei {
        /// Load system from JSON config (not yet implemented)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Example system to analyze
        #[arg(long, value_enum, default_value_t = ExampleSystem::Solar)]
        example: ExampleSystem,
        /// Number of nodes for the hyphal network example
        #[arg(long, default_value_t = 1000)]
        nodes: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute Watts-Strogatz small-world metrics for a graph
    SmallWorld {
        /// Number of nodes
        #[arg(short = 'n', long, default_value_t = 100)]
        nodes: usize,
        /// Average degree
        #[arg(short = 'k', long, default_value_t = 6)]
        degree: usize,
        /// Rewiring probability
        #[arg(short = 'p', long, default_value_t = 0.1)]
        rewire: f64,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Load graph from an edge-list CSV instead of generating one
        #[arg(long)]
        edgelist: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExampleSystem {
    Solar,
    Hyphal,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eroei {
            config,
            example,
            nodes,
            json,
        } => cmd_eroei(config.as_deref(), example, nodes, json),
        Commands::SmallWorld {
            nodes,
            degree,
            rewire,
            seed,
            edgelist,
            json,
        } => cmd_small_world(nodes, degree, rewire, seed, edgelist.as_deref(), json),
    }
}

fn cmd_eroei(
    config: Option<&Path>,
    example: ExampleSystem,
    nodes: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if config.is_some() {
        println!("Config loading not yet implemented");
        return Ok(());
    }

    match example {
        ExampleSystem::Solar => {
            let analysis = example_solar_system()?.analyze();
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
                println!("\n{}", "=".repeat(70));
                println!("CONCLUSION: This solar system is viable (EROEI > 7)");
                println!("{}", "=".repeat(70));
            }
        }
        ExampleSystem::Hyphal => {
            let params = HyphalParams {
                num_nodes: nodes,
                ..Default::default()
            };
            let analysis = hyphal_network_system(params)?.analyze();
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
                println!("\n{}", "=".repeat(70));
                println!("CONCLUSION: Hyphal Network is a PURE CONSUMER");
                println!();
                println!("This system has EROEI = 0 because it produces no energy.");
                println!("It requires an external energy source (autotrophic layer).");
                println!();
                println!("To make this viable, you must:");
                println!("1. Specify where the energy comes from (solar, wind, grid?)");
                println!("2. Calculate the EROEI of that source");
                println!("3. Ensure net energy after network costs is positive");
                println!("{}", "=".repeat(70));
            }
        }
    }
    Ok(())
}

fn cmd_small_world(
    nodes: usize,
    degree: usize,
    rewire: f64,
    seed: Option<u64>,
    edgelist: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let g: Graph = if let Some(path) = edgelist {
        let g = load_edge_list(path)?;
        println!(
            "Loaded graph with {} nodes and {} edges",
            g.node_count(),
            g.edge_count()
        );
        g
    } else {
        let g = watts_strogatz(nodes, degree, rewire, seed);
        println!("Generated Watts-Strogatz graph: N={nodes}, k={degree}, p={rewire}");
        g
    };

    println!("\nCalculating metrics...");
    let metrics = small_world_metrics(&g);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print_metrics(&metrics);
    }
    Ok(())
}

/// Pretty print an EROEI system analysis.
fn print_analysis(analysis: &SystemAnalysis) {
    println!("\n{}", "=".repeat(70));
    println!("ENERGY SYSTEM ANALYSIS: {}", analysis.system_name);
    println!("{}", "=".repeat(70));

    println!(
        "\nTotal Output:           {} kWh/year",
        fmt_kwh(analysis.total_output_kwh_year)
    );
    println!(
        "Total Input:            {} kWh/year",
        fmt_kwh(analysis.total_input_kwh_year)
    );
    println!(
        "Net Energy:             {} kWh/year",
        fmt_kwh(analysis.net_energy_kwh_year)
    );
    println!("\nSystem EROEI:           {:.2}", analysis.system_eroei);
    println!("Viability:              {}", analysis.viability_assessment);
    println!(
        "Meets 7:1 threshold:    {}",
        if analysis.meets_7_threshold { "YES ✓" } else { "NO ✗" }
    );
    println!(
        "Meets 10:1 threshold:   {}",
        if analysis.meets_10_threshold { "YES ✓" } else { "NO ✗" }
    );

    println!("\n{}", "-".repeat(70));
    println!("COMPONENT BREAKDOWN");
    println!("{}", "-".repeat(70));

    for c in &analysis.components {
        println!("\n{} ({})", c.name, c.class);
        println!("  Output:           {} kWh/year", fmt_kwh(c.output_kwh_year));
        println!(
            "  Operational input: {} kWh/year",
            fmt_kwh(c.input_kwh_year)
        );
        println!(
            "  Annualized embodied: {} kWh/year",
            fmt_kwh(c.annualized_embodied)
        );
        println!(
            "  Total input:      {} kWh/year",
            fmt_kwh(c.total_annual_input)
        );
        if c.component_eroei.is_finite() {
            println!("  Component EROEI:  {:.2}", c.component_eroei);
        } else {
            println!("  Component EROEI:  N/A (consumer only)");
        }
        if !c.notes.is_empty() {
            println!("  Notes: {}", c.notes);
        }
    }
}

/// Pretty print a small-world metric set.
fn print_metrics(metrics: &SmallWorldMetrics) {
    println!("\n{}", "=".repeat(60));
    println!("SMALL-WORLD NETWORK ANALYSIS");
    println!("{}", "=".repeat(60));
    println!("Nodes (N):                    {}", metrics.n);
    println!("Edges (M):                    {}", metrics.m);
    println!("Average degree (k):           {:.2}", metrics.k);
    println!("{}", "-".repeat(60));
    println!("Clustering coefficient (C):   {:.4}", metrics.c);
    println!("Random graph C:               {:.4}", metrics.c_random);
    println!("γ = C/C_random:               {:.2}", metrics.gamma);
    println!("{}", "-".repeat(60));
    println!("Path length (L):              {:.4}", metrics.l);
    println!("Random graph L:               {:.4}", metrics.l_random);
    println!("λ = L/L_random:               {:.2}", metrics.lambda);
    println!(
        "Expected SW L [log(N)/log(k)]: {:.4}",
        metrics.l_expected_sw
    );
    println!("{}", "-".repeat(60));
    println!("Small-world coefficient (σ):  {:.2}", metrics.sigma);
    println!(
        "Is small-world:               {}",
        if metrics.is_small_world { "YES" } else { "NO" }
    );
    println!("{}", "=".repeat(60));
    println!("\nInterpretation: {}", metrics.interpretation);
}

/// Format a kWh quantity with thousands separators, rounded to integer.
fn fmt_kwh(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_kwh_groups_thousands() {
        assert_eq!(fmt_kwh(0.0), "0");
        assert_eq!(fmt_kwh(999.0), "999");
        assert_eq!(fmt_kwh(1_500_000.0), "1,500,000");
        assert_eq!(fmt_kwh(-12_345.6), "-12,346");
        assert_eq!(fmt_kwh(1234.4), "1,234");
    }
}
