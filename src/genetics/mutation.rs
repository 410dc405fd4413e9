//! Per-gene point mutation.

use super::alphabet::{Alphabet, Gene};
use rand::Rng;

/// Mutate each gene independently with probability `rate`, replacing it with
/// a different letter. Returns the number of mutated genes.
///
/// A rate of 0.0 never mutates and a rate of 1.0 mutates every gene, since
/// the draw is uniform in `[0, 1)`.
pub fn point_mutate<R: Rng + ?Sized>(
    genes: &mut [Gene],
    rate: f64,
    alphabet: &Alphabet,
    rng: &mut R,
) -> usize {
    if rate <= 0.0 {
        return 0;
    }

    let mut mutated = 0;
    for gene in genes.iter_mut() {
        if rng.gen::<f64>() < rate {
            *gene = alphabet.random_gene_except(rng, *gene);
            mutated += 1;
        }
    }
    mutated
}
