//! Individual: a chromosome string and its fitness.

use crate::config::Config;
use crate::error::BreedError;
use crate::fitness;
use crate::genetics::alphabet::{Alphabet, Gene};
use crate::genetics::crossover::CrossoverOperator;
use crate::genetics::mutation::point_mutate;
use rand::Rng;
use std::fmt;

/// Everything `Individual::breed` needs besides the parents
#[derive(Debug, Clone, PartialEq)]
pub struct BreedParams {
    pub crossover: CrossoverOperator,
    /// Children longer than this are truncated from the end
    pub max_length: usize,
    /// Per-gene mutation probability
    pub mutation_rate: f64,
    pub alphabet: Alphabet,
}

impl BreedParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            crossover: CrossoverOperator::from_config(&config.breeding),
            max_length: config.chromosome.max_length,
            mutation_rate: config.breeding.mutation_rate,
            alphabet: Alphabet::new(config.chromosome.alphabet_size),
        }
    }
}

/// A member of the population. Immutable once constructed; the fitness is
/// scored at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    chromosome: Vec<Gene>,
    fitness: i32,
    generation: u32,
    mutations: usize,
}

impl Individual {
    /// Random chromosome of `length` genes drawn uniformly from `alphabet`.
    pub fn random<R: Rng + ?Sized>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        let chromosome = (0..length).map(|_| alphabet.random_gene(rng)).collect();
        Self::from_genes(chromosome)
    }

    /// Wrap an existing chromosome as a generation-0 individual.
    pub fn from_genes(chromosome: Vec<Gene>) -> Self {
        Self::with_lineage(chromosome, 0, 0)
    }

    /// Wrap a chromosome bred in `generation` with `mutations` mutated genes.
    pub fn with_lineage(chromosome: Vec<Gene>, generation: u32, mutations: usize) -> Self {
        let fitness = fitness::score(&chromosome);
        Self {
            chromosome,
            fitness,
            generation,
            mutations,
        }
    }

    /// Child of a prefix of `parent1` and a suffix of `parent2`, truncated to
    /// `params.max_length` and then point-mutated.
    pub fn breed<R: Rng + ?Sized>(
        parent1: &Individual,
        parent2: &Individual,
        params: &BreedParams,
        rng: &mut R,
    ) -> Result<Self, BreedError> {
        let segments = params.crossover.draw_segments(rng);
        let mut splice = params.crossover.splice(
            &parent1.chromosome,
            &parent2.chromosome,
            segments,
            params.max_length,
        )?;

        let mutations = point_mutate(&mut splice.genes, params.mutation_rate, &params.alphabet, rng);

        log::trace!(
            "Bred {} from {} + {} (prefix={}, suffix={}, truncated={}, mutations={})",
            Alphabet::render(&splice.genes),
            parent1,
            parent2,
            splice.prefix_len,
            splice.suffix_len,
            splice.truncated,
            mutations
        );

        let generation = parent1.generation.max(parent2.generation) + 1;
        Ok(Self::with_lineage(splice.genes, generation, mutations))
    }

    /// Palindrome fitness of the chromosome
    pub fn fitness(&self) -> i32 {
        self.fitness
    }

    /// Rounds of breeding behind this individual (0 = randomly seeded)
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Genes changed by mutation when this individual was bred
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    pub fn genes(&self) -> &[Gene] {
        &self.chromosome
    }

    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Alphabet::render(&self.chromosome))
    }
}
