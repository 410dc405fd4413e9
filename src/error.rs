//! Error types for configuration, breeding and file I/O.

/// Invalid simulation parameters, reported before a run starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be >= 1, got {0}")]
    EmptyPopulation(usize),
    #[error("winners must be >= 2 to pick two distinct parents, got {0}")]
    TooFewWinners(usize),
    #[error("winners ({winners}) cannot exceed population size ({size})")]
    WinnersExceedPopulation { winners: usize, size: usize },
    #[error("initial chromosome length must be >= 1, got {0}")]
    EmptyChromosome(usize),
    #[error("max chromosome length ({max_length}) must be >= initial length ({initial_length})")]
    MaxLengthBelowInitial {
        initial_length: usize,
        max_length: usize,
    },
    #[error("alphabet size must be between 2 and {max}, got {size}")]
    AlphabetSize { size: u8, max: u8 },
    #[error("mutation rate must be between 0.0 and 1.0, got {0}")]
    MutationRateOutOfRange(f64),
    #[error("segment range must satisfy 1 <= min ({min}) <= max ({max})")]
    SegmentRange { min: usize, max: usize },
    #[error("report interval must be >= 1")]
    ZeroReportInterval,
}

/// Which parent failed to supply enough genes during crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRole {
    Prefix,
    Suffix,
}

impl std::fmt::Display for ParentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentRole::Prefix => write!(f, "prefix parent"),
            ParentRole::Suffix => write!(f, "suffix parent"),
        }
    }
}

/// Crossover failures under the strict short-parent policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreedError {
    #[error("{parent} has {available} genes, crossover needs {needed}")]
    InsufficientParentLength {
        parent: ParentRole,
        needed: usize,
        available: usize,
    },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("BreedError: {0}")]
    Breed(#[from] BreedError),
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
