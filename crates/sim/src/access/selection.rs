//! Locus subsets used by the genotype accessors.

pub use crate::errors::SelectionError;
use crate::genome::GenotypeStore;

/// A per-chromosome selection of loci.
///
/// `loci_per_chr[c]` loci are taken from chromosome `c`; their 0-based
/// positions within the chromosome are the next `loci_per_chr[c]` entries
/// of the flat `locations` list. Matrix columns follow the flat list, so
/// chromosome `c` occupies a contiguous column range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LociSelection {
    loci_per_chr: Vec<usize>,
    locations: Vec<usize>,
    /// First column of each chromosome.
    offsets: Vec<usize>,
}

impl LociSelection {
    /// Create a selection from per-chromosome counts and flat locations.
    ///
    /// # Errors
    /// Returns an error if the counts do not add up to `locations.len()`.
    pub fn new(loci_per_chr: Vec<usize>, locations: Vec<usize>) -> Result<Self, SelectionError> {
        let expected: usize = loci_per_chr.iter().sum();
        if expected != locations.len() {
            return Err(SelectionError::CountMismatch {
                expected,
                actual: locations.len(),
            });
        }
        let offsets = column_offsets(&loci_per_chr);
        Ok(Self {
            loci_per_chr,
            locations,
            offsets,
        })
    }

    /// Select every locus of `store`, in order.
    pub fn all(store: &GenotypeStore) -> Self {
        let loci_per_chr = store.loci_per_chromosome().to_vec();
        let locations = loci_per_chr.iter().flat_map(|&n| 0..n).collect();
        let offsets = column_offsets(&loci_per_chr);
        Self {
            loci_per_chr,
            locations,
            offsets,
        }
    }

    /// Check that the selection fits the shape of `store`.
    pub fn validate_against(&self, store: &GenotypeStore) -> Result<(), SelectionError> {
        if self.loci_per_chr.len() != store.n_chromosomes() {
            return Err(SelectionError::ChromosomeCountMismatch {
                selection: self.loci_per_chr.len(),
                store: store.n_chromosomes(),
            });
        }
        for (chromosome, &n_loci) in store.loci_per_chromosome().iter().enumerate() {
            if let Some(&locus) = self
                .chromosome_locations(chromosome)
                .iter()
                .find(|&&locus| locus >= n_loci)
            {
                return Err(SelectionError::LocusOutOfRange {
                    chromosome,
                    locus,
                    n_loci,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn n_chromosomes(&self) -> usize {
        self.loci_per_chr.len()
    }

    /// Total number of selected loci (matrix columns).
    #[inline]
    pub fn n_selected(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn loci_per_chromosome(&self) -> &[usize] {
        &self.loci_per_chr
    }

    /// Selected 0-based loci of one chromosome.
    pub fn chromosome_locations(&self, chromosome: usize) -> &[usize] {
        let start = self.offsets[chromosome];
        &self.locations[start..start + self.loci_per_chr[chromosome]]
    }

    /// Matrix column of the first selected locus of `chromosome`.
    #[inline]
    pub fn column_offset(&self, chromosome: usize) -> usize {
        self.offsets[chromosome]
    }
}

fn column_offsets(loci_per_chr: &[usize]) -> Vec<usize> {
    loci_per_chr
        .iter()
        .scan(0, |next, &n| {
            let start = *next;
            *next += n;
            Some(start)
        })
        .collect()
}
