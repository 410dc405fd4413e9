//! chromosim - CLI Entry Point
//!
//! Evolves letter strings toward palindromes.

use chromosim::report::{ConsoleReporter, LogReporter};
use chromosim::{benchmark, Config, Simulation, StatsHistory};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "chromosim")]
#[command(version)]
#[command(about = "Evolutionary string simulator with truncation selection and point mutation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Override the configured number of rounds
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Write the per-generation stats history as JSON
        #[arg(long)]
        stats_out: Option<PathBuf>,

        /// Quiet mode (log summaries instead of full reports)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of rounds
        #[arg(short, long, default_value = "1000")]
        rounds: u32,

        /// Population size
        #[arg(short, long, default_value = "100")]
        population: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rounds,
            seed,
            stats_out,
            quiet,
        } => run_simulation(config, rounds, seed, stats_out, quiet),

        Commands::Benchmark { rounds, population } => {
            init_logging("info");
            run_benchmark(rounds, population)
        }

        Commands::Init { output } => {
            init_logging("info");
            generate_config(output)
        }
    }
}

/// `RUST_LOG` wins over the configured level
fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_simulation(
    config_path: PathBuf,
    rounds: Option<u32>,
    seed: Option<u64>,
    stats_out: Option<PathBuf>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let (mut config, source) = if config_path.exists() {
        (Config::from_file(&config_path)?, format!("{:?}", config_path))
    } else {
        (Config::default(), "defaults".to_string())
    };
    init_logging(&config.logging.log_level);
    log::info!("Configuration loaded from {}", source);

    if let Some(r) = rounds {
        config.population.rounds = r;
    }

    let mut sim = match seed {
        Some(s) => Simulation::new_with_seed(config.clone(), s)?,
        None => Simulation::new(config.clone())?,
    };

    println!("Starting simulation");
    println!("  Population: {} ({} winners)", config.population.size, config.population.winners);
    println!(
        "  Chromosomes: length {} (max {}), {} letters",
        config.chromosome.initial_length,
        config.chromosome.max_length,
        config.chromosome.alphabet_size
    );
    println!("  Mutation rate: {}", config.breeding.mutation_rate);
    println!("  Rounds: {}", config.population.rounds);
    println!("  Seed: {}", sim.seed());
    println!();

    let interval = config.logging.report_interval;
    let mut history = StatsHistory::new();
    let start = Instant::now();

    let population = if quiet {
        sim.run((LogReporter::new(interval), &mut history))?
    } else {
        sim.run((ConsoleReporter::stdout(interval), &mut history))?
    };

    let elapsed = start.elapsed();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    println!("Rounds: {}", sim.round());
    if let Some(best) = population.first() {
        println!("Best individual: {} (fitness {})", best, best.fitness());
    }
    if let (Some(first), Some(last)) = (history.snapshots.first(), history.latest()) {
        println!(
            "Mean fitness: {:.2} -> {:.2}",
            first.mean_fitness, last.mean_fitness
        );
    }

    if let Some(path) = stats_out {
        history.save(&path)?;
        println!("Stats history: {:?}", path);
    }

    Ok(())
}

fn run_benchmark(rounds: u32, population: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== chromosim Benchmark ===");
    println!("Rounds: {}", rounds);
    println!("Population: {}", population);
    println!();

    let result = benchmark(rounds, population)?;
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
