//! Generation reporters.
//!
//! The simulation hands every ranked generation's stats to a `Reporter`;
//! what happens next (console lines, log records, history for export) is up
//! to the implementation.

use crate::stats::{GenerationStats, StatsHistory};
use std::io::{self, Write};

/// Consumer of per-generation statistics
pub trait Reporter {
    fn report(&mut self, stats: &GenerationStats);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, stats: &GenerationStats) {
        (**self).report(stats);
    }
}

impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn report(&mut self, stats: &GenerationStats) {
        self.0.report(stats);
        self.1.report(stats);
    }
}

impl Reporter for StatsHistory {
    fn report(&mut self, stats: &GenerationStats) {
        self.record(stats.clone());
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _stats: &GenerationStats) {}
}

fn is_due(round: Option<u32>, interval: u32) -> bool {
    match round {
        None => true,
        Some(r) => r % interval.max(1) == 0,
    }
}

/// Human-readable block per generation
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    interval: u32,
}

impl ConsoleReporter {
    pub fn stdout(interval: u32) -> Self {
        Self::new(io::stdout(), interval)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, interval: u32) -> Self {
        Self { out, interval }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, stats: &GenerationStats) -> io::Result<()> {
        if let Some(round) = stats.round {
            writeln!(self.out, "Round {}", round)?;
        }
        writeln!(self.out, "Best chromosome: {}", stats.best_chromosome)?;
        writeln!(self.out, "Best fitness: {}", stats.best_fitness)?;
        writeln!(self.out, "Boundary winner fitness: {}", stats.boundary_fitness)?;
        writeln!(self.out, "Least fitness: {}", stats.worst_fitness)?;
        writeln!(
            self.out,
            "Mean fitness: {:.2} | Unique: {} | Mutations: {}",
            stats.mean_fitness, stats.diversity.unique_chromosomes, stats.mutations
        )?;
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, stats: &GenerationStats) {
        if !is_due(stats.round, self.interval) {
            return;
        }
        if let Err(e) = self.write_block(stats) {
            log::warn!("Failed to write generation report: {}", e);
        }
    }
}

/// One `info` log line per generation
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    interval: u32,
}

impl LogReporter {
    pub fn new(interval: u32) -> Self {
        Self { interval }
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, stats: &GenerationStats) {
        if is_due(stats.round, self.interval) {
            log::info!("{}", stats.summary());
        }
    }
}
