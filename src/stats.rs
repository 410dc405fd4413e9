//! Per-generation statistics.

use crate::error::Result;
use crate::genetics::DiversityMetrics;
use crate::individual::Individual;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Statistics snapshot for one ranked generation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Round that produced this generation (`None` for the seeded population)
    pub round: Option<u32>,
    /// Rendered chromosome of the fittest individual
    pub best_chromosome: String,
    pub best_fitness: i32,
    /// Fitness of the last individual allowed to breed (rank `winners`)
    pub boundary_fitness: i32,
    pub worst_fitness: i32,
    pub mean_fitness: f64,
    pub population: usize,
    /// Genes mutated while breeding this generation
    pub mutations: usize,
    pub diversity: DiversityMetrics,
}

impl GenerationStats {
    /// Collect stats from a population already ranked best-first.
    ///
    /// Panics on an empty population or when `winners` is outside
    /// `1..=ranked.len()`; both are ruled out by a validated config.
    pub fn from_ranked(ranked: &[Individual], winners: usize, round: Option<u32>) -> Self {
        assert!(!ranked.is_empty(), "cannot describe an empty population");
        assert!(
            (1..=ranked.len()).contains(&winners),
            "winners ({}) outside population of {}",
            winners,
            ranked.len()
        );

        let best = &ranked[0];
        let total: i64 = ranked.iter().map(|i| i64::from(i.fitness())).sum();

        Self {
            round,
            best_chromosome: best.to_string(),
            best_fitness: best.fitness(),
            boundary_fitness: ranked[winners - 1].fitness(),
            worst_fitness: ranked[ranked.len() - 1].fitness(),
            mean_fitness: total as f64 / ranked.len() as f64,
            population: ranked.len(),
            mutations: ranked.iter().map(|i| i.mutations()).sum(),
            diversity: DiversityMetrics::measure(ranked),
        }
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        let round = match self.round {
            Some(r) => format!("{:4}", r),
            None => "init".to_string(),
        };
        format!(
            "R:{} | Best:{:3} | Kth:{:3} | Worst:{:3} | Mean:{:6.2} | Uniq:{:4} | Mut:{:4} | {}",
            round,
            self.best_fitness,
            self.boundary_fitness,
            self.worst_fitness,
            self.mean_fitness,
            self.diversity.unique_chromosomes,
            self.mutations,
            self.best_chromosome
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots, oldest first
    pub snapshots: Vec<GenerationStats>,
}

impl StatsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: GenerationStats) {
        self.snapshots.push(stats);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn latest(&self) -> Option<&GenerationStats> {
        self.snapshots.last()
    }

    /// Best fitness per generation (index 0 = seeded population)
    pub fn best_series(&self) -> Vec<(usize, i32)> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.best_fitness))
            .collect()
    }

    /// Mean fitness per generation
    pub fn mean_series(&self) -> Vec<(usize, f64)> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.mean_fitness))
            .collect()
    }

    /// Save history to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load history from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
