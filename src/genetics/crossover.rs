//! Prefix/suffix crossover for chromosome strings.

use crate::config::{BreedingConfig, ShortParentPolicy};
use crate::error::{BreedError, ParentRole};
use crate::genetics::alphabet::Gene;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Segment lengths drawn for one crossover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub prefix: usize,
    pub suffix: usize,
}

/// Result of splicing two parents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub genes: Vec<Gene>,
    /// Genes copied from the front of the first parent
    pub prefix_len: usize,
    /// Genes copied from the back of the second parent
    pub suffix_len: usize,
    /// Genes dropped from the end to respect the max length
    pub truncated: usize,
}

/// Crossover operator: a prefix of one parent followed by a suffix of the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverOperator {
    pub min_segment: usize,
    pub max_segment: usize,
    /// Copy `prefix + 1` genes from the first parent instead of `prefix`
    pub prefix_extra_gene: bool,
    pub short_parent: ShortParentPolicy,
}

impl Default for CrossoverOperator {
    fn default() -> Self {
        Self::from_config(&BreedingConfig::default())
    }
}

impl CrossoverOperator {
    pub fn from_config(config: &BreedingConfig) -> Self {
        Self {
            min_segment: config.min_segment,
            max_segment: config.max_segment,
            prefix_extra_gene: config.prefix_extra_gene,
            short_parent: config.short_parent,
        }
    }

    /// Draw prefix then suffix length, each uniform in `min_segment..=max_segment`.
    pub fn draw_segments<R: Rng + ?Sized>(&self, rng: &mut R) -> Segments {
        let prefix = rng.gen_range(self.min_segment..=self.max_segment);
        let suffix = rng.gen_range(self.min_segment..=self.max_segment);
        Segments { prefix, suffix }
    }

    /// Concatenate the prefix of `first` and the suffix of `second`, then
    /// truncate from the end to `max_length`.
    pub fn splice(
        &self,
        first: &[Gene],
        second: &[Gene],
        segments: Segments,
        max_length: usize,
    ) -> Result<Splice, BreedError> {
        let wanted_prefix = segments
            .prefix
            .saturating_add(usize::from(self.prefix_extra_gene));
        let prefix_len = self.take(ParentRole::Prefix, wanted_prefix, first.len())?;
        let suffix_len = self.take(ParentRole::Suffix, segments.suffix, second.len())?;

        let mut genes = Vec::with_capacity(prefix_len + suffix_len);
        genes.extend_from_slice(&first[..prefix_len]);
        genes.extend_from_slice(&second[second.len() - suffix_len..]);

        let truncated = genes.len().saturating_sub(max_length);
        genes.truncate(max_length);

        Ok(Splice {
            genes,
            prefix_len,
            suffix_len,
            truncated,
        })
    }

    fn take(&self, parent: ParentRole, needed: usize, available: usize) -> Result<usize, BreedError> {
        if needed <= available {
            return Ok(needed);
        }
        match self.short_parent {
            ShortParentPolicy::Clamp => Ok(available),
            ShortParentPolicy::Strict => Err(BreedError::InsufficientParentLength {
                parent,
                needed,
                available,
            }),
        }
    }
}
