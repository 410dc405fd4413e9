//! Genetics module - alphabet, crossover, mutation and diversity metrics.

pub mod alphabet;
pub mod crossover;
pub mod diversity;
pub mod mutation;

pub use alphabet::{Alphabet, Gene};
pub use crossover::{CrossoverOperator, Segments, Splice};
pub use diversity::DiversityMetrics;
pub use mutation::point_mutate;
