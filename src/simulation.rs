//! Simulation engine - generation loop with truncation selection.

use crate::config::Config;
use crate::error::{BreedError, ConfigError, Result};
use crate::genetics::Alphabet;
use crate::individual::{BreedParams, Individual};
use crate::report::Reporter;
use crate::stats::GenerationStats;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sort best-first by fitness. The sort is stable, so equally fit
/// individuals keep their relative order.
pub fn rank_population(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
}

/// The evolutionary run
pub struct Simulation {
    config: Config,
    breed_params: BreedParams,

    // Rounds completed by `run`
    round: u32,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Simulation {
    /// Create a simulation with a random seed
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a simulation with a specific seed for reproducibility.
    /// Fails if the configuration is invalid.
    pub fn new_with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            breed_params: BreedParams::from_config(&config),
            config,
            round: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// `n` random individuals of the configured initial length
    pub fn initialize_population(&mut self, n: usize) -> Vec<Individual> {
        let alphabet = Alphabet::new(self.config.chromosome.alphabet_size);
        let length = self.config.chromosome.initial_length;

        (0..n)
            .map(|_| Individual::random(length, &alphabet, &mut self.rng))
            .collect()
    }

    /// Breed the next generation from the first `winners` individuals of an
    /// already-ranked generation. Each child has two distinct parents.
    pub fn evolve(&mut self, generation: &[Individual]) -> Result<Vec<Individual>, BreedError> {
        let winners = self.config.population.winners;
        let size = self.config.population.size;
        assert!(
            generation.len() >= winners,
            "generation of {} cannot supply {} winners",
            generation.len(),
            winners
        );

        let pool = &generation[..winners];
        let mut next = Vec::with_capacity(size);

        for _ in 0..size {
            let mut first = self.rng.gen_range(0..winners);
            let second = self.rng.gen_range(0..winners);
            while first == second {
                first = self.rng.gen_range(0..winners);
            }

            let child = Individual::breed(&pool[first], &pool[second], &self.breed_params, &mut self.rng)?;
            next.push(child);
        }

        log::debug!(
            "Bred {} children from {} winners (best parent fitness {})",
            next.len(),
            winners,
            pool[0].fitness()
        );

        Ok(next)
    }

    /// Rank `population` in place and report its statistics.
    pub fn describe_generation<R: Reporter + ?Sized>(
        &self,
        population: &mut [Individual],
        round: Option<u32>,
        reporter: &mut R,
    ) -> GenerationStats {
        rank_population(population);
        let stats =
            GenerationStats::from_ranked(population, self.config.population.winners, round);
        reporter.report(&stats);
        stats
    }

    /// Seed a population, then evolve it for the configured number of
    /// rounds, reporting every generation. Returns the final population,
    /// ranked best-first.
    pub fn run<R: Reporter>(&mut self, mut reporter: R) -> Result<Vec<Individual>> {
        let rounds = self.config.population.rounds;
        log::info!(
            "Starting simulation: population={}, winners={}, rounds={}, seed={}",
            self.config.population.size,
            self.config.population.winners,
            rounds,
            self.seed
        );

        let mut population = self.initialize_population(self.config.population.size);
        let mut stats = self.describe_generation(&mut population, None, &mut reporter);

        for round in 1..=rounds {
            population = self.evolve(&population)?;
            self.round = round;
            stats = self.describe_generation(&mut population, Some(round), &mut reporter);

            log::debug!(
                "Round {}: best={} boundary={} worst={} mutations={}",
                round,
                stats.best_fitness,
                stats.boundary_fitness,
                stats.worst_fitness,
                stats.mutations
            );
        }

        log::info!(
            "Simulation complete after {} rounds: best fitness {} ({})",
            self.round,
            stats.best_fitness,
            stats.best_chromosome
        );

        Ok(population)
    }
}
