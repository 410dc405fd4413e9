//! Gene alphabet: the first `size` capital letters, stored as indices.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single gene, an index into the alphabet (0 = 'A').
pub type Gene = u8;

/// Alphabet sizes above this cannot be rendered as single letters.
pub const MAX_ALPHABET_SIZE: u8 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    size: u8,
}

impl Alphabet {
    /// Panics on an empty alphabet; sizes are validated by `Config` first.
    pub fn new(size: u8) -> Self {
        assert!(size >= 1, "alphabet must contain at least one letter");
        Self { size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, gene: Gene) -> bool {
        gene < self.size
    }

    /// Uniformly random gene.
    pub fn random_gene<R: Rng + ?Sized>(&self, rng: &mut R) -> Gene {
        rng.gen_range(0..self.size)
    }

    /// Uniformly random gene different from `current`.
    ///
    /// Draws from the other `size - 1` letters in one step, which has the
    /// same distribution as resampling until the draw differs.
    pub fn random_gene_except<R: Rng + ?Sized>(&self, rng: &mut R, current: Gene) -> Gene {
        assert!(self.size >= 2, "cannot replace a gene in a one-letter alphabet");
        let draw = rng.gen_range(0..self.size - 1);
        if draw >= current {
            draw + 1
        } else {
            draw
        }
    }

    /// Display letter for a gene ('A', 'B', ...).
    pub fn letter(gene: Gene) -> char {
        char::from(b'A' + gene)
    }

    /// Render a chromosome as letters, e.g. "ABCBA".
    pub fn render(genes: &[Gene]) -> String {
        genes.iter().map(|&g| Self::letter(g)).collect()
    }
}
