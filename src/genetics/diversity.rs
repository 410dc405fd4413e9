//! Diversity metrics for a population of chromosomes.

use crate::individual::Individual;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Collection of diversity metrics for a population
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversityMetrics {
    /// Number of distinct chromosomes
    pub unique_chromosomes: usize,
    /// Shannon entropy over chromosome frequencies (0 = clonal)
    pub shannon_entropy: f64,
    /// Mean chromosome length
    pub mean_length: f64,
}

impl DiversityMetrics {
    pub fn measure(population: &[Individual]) -> Self {
        if population.is_empty() {
            return Self::default();
        }

        // Ordered so the entropy sum is reproducible
        let mut counts: BTreeMap<&[u8], usize> = BTreeMap::new();
        for individual in population {
            *counts.entry(individual.genes()).or_insert(0) += 1;
        }

        let total = population.len() as f64;
        let shannon_entropy = counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.ln()
            })
            .sum();

        let mean_length =
            population.iter().map(|i| i.len()).sum::<usize>() as f64 / total;

        Self {
            unique_chromosomes: counts.len(),
            shannon_entropy,
            mean_length,
        }
    }
}
