//! Idea Landscape Model
//!
//! Builds a run from landscape.toml (or defaults), steps it, and prints a
//! summary. Optionally writes a JSON snapshot of the final state.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use landscape_core::output::{generate_snapshot, write_snapshot};
use landscape_core::{setup_run, Config, LandscapeSimulation};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "idea_landscape")]
#[command(about = "Heterogeneous perception of an interpolated idea landscape")]
struct Args {
    /// Configuration file (defaults to landscape.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of steps to simulate
    #[arg(long)]
    steps: Option<u64>,

    /// Write a JSON snapshot of the final state here
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(steps) = args.steps {
        config.simulation.steps = steps;
    }

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    config.validate()?;

    println!("Idea Landscape Model");
    println!("====================");
    println!("Seed: {}", config.simulation.seed);
    println!("Steps: {}", config.simulation.steps);
    println!("Beta: {}", config.bias.beta);
    println!();

    let setup = setup_run(&config)?;
    println!("{}", setup.network);
    println!(
        "Problem space: {} ideas of {} digits",
        setup.problem_space.len(),
        setup.problem_space.dimension()
    );
    println!("Representative ideas:");
    for anchor in setup.landscape.representatives().iter() {
        println!("  {}  {:.4}", anchor.idea, anchor.utility);
    }
    println!("Agents:");
    for agent in &setup.agents {
        let holdings: Vec<String> = agent.holdings.iter().map(|v| v.to_string()).collect();
        println!(
            "  #{} node {}  xi {:+.4}  holds [{}]",
            agent.index,
            agent.node,
            agent.heterogeneity,
            holdings.join(", ")
        );
    }
    println!();

    let mut sim = LandscapeSimulation::new(setup);
    sim.run(config.simulation.steps);
    println!("Simulation complete. Ran {} steps.", sim.current_step());

    if let Some(path) = &args.output {
        let snapshot = generate_snapshot(&mut sim)?;
        write_snapshot(&snapshot, path)?;
        println!(
            "Mean perception error: {:.4}, perceived spread: {:.4}",
            snapshot.metrics.mean_absolute_error, snapshot.metrics.perceived_spread
        );
    }

    Ok(())
}
