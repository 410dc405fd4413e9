//! Configuration system for chromosim runs.
//!
//! Supports YAML configuration files with defaults matching the classic
//! 100-individual, 100-round palindrome experiment.

use crate::error::{ConfigError, Result};
use crate::genetics::alphabet::MAX_ALPHABET_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub population: PopulationConfig,
    pub chromosome: ChromosomeConfig,
    #[serde(default)]
    pub breeding: BreedingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Population and selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Individuals per generation
    pub size: usize,
    /// Top-ranked individuals allowed to breed
    pub winners: usize,
    /// Rounds of evolution after the initial generation
    pub rounds: u32,
}

/// Chromosome shape configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromosomeConfig {
    /// Length of randomly seeded chromosomes
    pub initial_length: usize,
    /// Bred chromosomes are truncated to this length
    pub max_length: usize,
    /// Number of distinct gene states (letters A..)
    pub alphabet_size: u8,
}

/// What crossover does when a parent is shorter than the drawn segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortParentPolicy {
    /// Take as many genes as the parent has
    #[default]
    Clamp,
    /// Fail the breed with `BreedError::InsufficientParentLength`
    Strict,
}

/// Crossover and mutation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingConfig {
    /// Per-gene mutation probability (0.0 - 1.0)
    pub mutation_rate: f64,
    /// Smallest prefix/suffix length drawn
    pub min_segment: usize,
    /// Largest prefix/suffix length drawn (inclusive)
    pub max_segment: usize,
    /// Copy one extra gene from the prefix parent
    pub prefix_extra_gene: bool,
    pub short_parent: ShortParentPolicy,
}

/// Logging and reporting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Rounds between generation reports
    pub report_interval: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            chromosome: ChromosomeConfig::default(),
            breeding: BreedingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            winners: 15,
            rounds: 100,
        }
    }
}

impl Default for ChromosomeConfig {
    fn default() -> Self {
        Self {
            initial_length: 8,
            max_length: 20,
            alphabet_size: 5,
        }
    }
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.01,
            min_segment: 1,
            max_segment: 4,
            prefix_extra_gene: true,
            short_parent: ShortParentPolicy::Clamp,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_interval: 1,
        }
    }
}

impl Config {
    /// Build a config from the seven classic parameters, keeping default
    /// breeding and logging settings.
    pub fn classic(
        size: usize,
        winners: usize,
        rounds: u32,
        initial_length: usize,
        max_length: usize,
        mutation_rate: f64,
        alphabet_size: u8,
    ) -> Self {
        Self {
            population: PopulationConfig {
                size,
                winners,
                rounds,
            },
            chromosome: ChromosomeConfig {
                initial_length,
                max_length,
                alphabet_size,
            },
            breeding: BreedingConfig {
                mutation_rate,
                ..BreedingConfig::default()
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let population = &self.population;
        let chromosome = &self.chromosome;
        let breeding = &self.breeding;

        if population.size == 0 {
            return Err(ConfigError::EmptyPopulation(population.size));
        }
        if population.winners < 2 {
            return Err(ConfigError::TooFewWinners(population.winners));
        }
        if population.winners > population.size {
            return Err(ConfigError::WinnersExceedPopulation {
                winners: population.winners,
                size: population.size,
            });
        }
        if chromosome.initial_length == 0 {
            return Err(ConfigError::EmptyChromosome(chromosome.initial_length));
        }
        if chromosome.max_length < chromosome.initial_length {
            return Err(ConfigError::MaxLengthBelowInitial {
                initial_length: chromosome.initial_length,
                max_length: chromosome.max_length,
            });
        }
        if chromosome.alphabet_size < 2 || chromosome.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(ConfigError::AlphabetSize {
                size: chromosome.alphabet_size,
                max: MAX_ALPHABET_SIZE,
            });
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&breeding.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(breeding.mutation_rate));
        }
        if breeding.min_segment == 0 || breeding.min_segment > breeding.max_segment {
            return Err(ConfigError::SegmentRange {
                min: breeding.min_segment,
                max: breeding.max_segment,
            });
        }
        if self.logging.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}
