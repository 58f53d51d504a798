//! Random founder populations.

use crate::base::DIPLOID;
use crate::genome::GenotypeStore;
pub use crate::errors::GenotypeError;
use rand::Rng;

/// Draw a diploid founder population with independent biallelic loci.
///
/// Every allele is 1 with probability `allele_frequency`, independently of
/// all other alleles (linkage equilibrium, Hardy-Weinberg proportions).
///
/// # Errors
/// Returns an error if `allele_frequency` is outside [0.0, 1.0] or
/// `loci_per_chr` is empty.
pub fn random_founders<R: Rng + ?Sized>(
    loci_per_chr: &[usize],
    n_individuals: usize,
    allele_frequency: f64,
    rng: &mut R,
) -> Result<GenotypeStore, GenotypeError> {
    if !(0.0..=1.0).contains(&allele_frequency) {
        return Err(GenotypeError::InvalidAlleleFrequency(allele_frequency));
    }
    GenotypeStore::from_fn(loci_per_chr, DIPLOID, n_individuals, |_, _, _, _| {
        u8::from(rng.random_bool(allele_frequency))
    })
}
