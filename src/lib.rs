//! # chromosim
//!
//! Evolutionary string simulator. A population of letter strings evolves
//! toward palindromes without repeated neighbours.
//!
//! ## Features
//!
//! - **Truncation selection**: only the top `winners` individuals breed
//! - **Prefix/suffix crossover**: children join the front of one parent to the back of another
//! - **Point mutation**: each gene flips to a different letter with a fixed probability
//! - **Configurable**: YAML configuration files
//! - **Reproducible**: Seeded random number generation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chromosim::{Config, Simulation};
//! use chromosim::report::ConsoleReporter;
//!
//! let config = Config::default();
//! let mut sim = Simulation::new_with_seed(config, 42)?;
//!
//! let population = sim.run(ConsoleReporter::stdout(10))?;
//! println!("Best: {} ({})", population[0], population[0].fitness());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use chromosim::Config;
//!
//! let mut config = Config::default();
//! config.population.size = 200;
//! config.breeding.mutation_rate = 0.05;
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod fitness;
pub mod genetics;
pub mod individual;
pub mod report;
pub mod simulation;
pub mod stats;

// Re-export main types
pub use config::Config;
pub use error::{BreedError, ConfigError, Error};
pub use individual::Individual;
pub use simulation::{rank_population, Simulation};
pub use stats::{GenerationStats, StatsHistory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark with default breeding settings and no reporting
pub fn benchmark(rounds: u32, population: usize) -> Result<BenchmarkResult, Error> {
    use std::time::Instant;

    let mut config = Config::default();
    config.population.size = population;
    config.population.rounds = rounds;
    config.population.winners = config.population.winners.min(population);

    let mut sim = Simulation::new_with_seed(config, 0)?;

    let start = Instant::now();
    let final_population = sim.run(report::NullReporter)?;
    let elapsed = start.elapsed();

    Ok(BenchmarkResult {
        rounds,
        population,
        elapsed_secs: elapsed.as_secs_f64(),
        rounds_per_second: rounds as f64 / elapsed.as_secs_f64(),
        best_fitness: final_population.first().map_or(0, |i| i.fitness()),
    })
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub rounds: u32,
    pub population: usize,
    pub elapsed_secs: f64,
    pub rounds_per_second: f64,
    pub best_fitness: i32,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Rounds: {}", self.rounds)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} rounds/s", self.rounds_per_second)?;
        writeln!(f, "Best fitness: {}", self.best_fitness)?;
        Ok(())
    }
}
