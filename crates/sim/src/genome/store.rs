//! Phased genotype storage.
//!
//! A [`GenotypeStore`] is an ordered collection of [`ChromosomeBlock`]s, one
//! per chromosome. Each block is a fixed-shape 3D array indexed by
//! (locus, homolog, individual), stored flat with the locus index varying
//! fastest and the individual index slowest:
//!
//! ```text
//! offset(locus, homolog, ind) = (ind * ploidy + homolog) * n_loci + locus
//! ```
//!
//! This keeps every homolog column contiguous, so a gamete can be written
//! or read as a single slice, and every individual's slot is a contiguous
//! `ploidy * n_loci` chunk that parallel engines can hand out with
//! `par_chunks_mut`.

use crate::base::Allele;
pub use crate::errors::GenotypeError;

/// Genotypes of all individuals for a single chromosome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeBlock {
    n_loci: usize,
    ploidy: usize,
    n_individuals: usize,
    data: Vec<Allele>,
}

impl ChromosomeBlock {
    /// Create a block with every allele set to 0.
    pub fn zeroed(n_loci: usize, ploidy: usize, n_individuals: usize) -> Self {
        Self {
            n_loci,
            ploidy,
            n_individuals,
            data: vec![0; n_loci * ploidy * n_individuals],
        }
    }

    /// Wrap existing flat data laid out as described in the module docs.
    ///
    /// # Errors
    /// Returns an error if `ploidy` is zero or `data` has the wrong length.
    pub fn from_data(
        n_loci: usize,
        ploidy: usize,
        n_individuals: usize,
        data: Vec<Allele>,
    ) -> Result<Self, GenotypeError> {
        if ploidy == 0 {
            return Err(GenotypeError::InvalidPloidy(ploidy));
        }
        let expected = n_loci * ploidy * n_individuals;
        if data.len() != expected {
            return Err(GenotypeError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            n_loci,
            ploidy,
            n_individuals,
            data,
        })
    }

    #[inline]
    pub fn n_loci(&self) -> usize {
        self.n_loci
    }

    #[inline]
    pub fn ploidy(&self) -> usize {
        self.ploidy
    }

    #[inline]
    pub fn n_individuals(&self) -> usize {
        self.n_individuals
    }

    /// Length of one individual's slot (all homologs).
    #[inline]
    pub fn slot_len(&self) -> usize {
        self.ploidy * self.n_loci
    }

    /// Borrow one homolog of one individual.
    ///
    /// # Panics
    /// Panics if `individual` or `homolog` is out of range.
    #[inline]
    pub fn homolog(&self, individual: usize, homolog: usize) -> &[Allele] {
        assert!(homolog < self.ploidy, "homolog {homolog} out of range");
        let start = (individual * self.ploidy + homolog) * self.n_loci;
        &self.data[start..start + self.n_loci]
    }

    /// Borrow all homologs of one individual as one contiguous slot.
    #[inline]
    pub fn individual(&self, individual: usize) -> &[Allele] {
        let start = individual * self.slot_len();
        &self.data[start..start + self.slot_len()]
    }

    /// Allele at (`locus`, `homolog`, `individual`).
    #[inline]
    pub fn allele(&self, locus: usize, homolog: usize, individual: usize) -> Allele {
        self.homolog(individual, homolog)[locus]
    }

    /// Borrow the flat backing data.
    #[inline]
    pub fn as_slice(&self) -> &[Allele] {
        &self.data
    }
}

/// Phased genotypes for a set of individuals across all chromosomes.
///
/// All blocks share the same individual count, ordering and ploidy. Stores
/// are never mutated after construction; engines always return new stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeStore {
    chromosomes: Vec<ChromosomeBlock>,
    /// Cached locus counts, in chromosome order.
    loci_per_chr: Vec<usize>,
}

impl GenotypeStore {
    /// Assemble a store from per-chromosome blocks.
    ///
    /// # Errors
    /// Returns an error if there are no blocks or the blocks disagree on
    /// individual count or ploidy.
    pub fn from_blocks(chromosomes: Vec<ChromosomeBlock>) -> Result<Self, GenotypeError> {
        let first = chromosomes.first().ok_or(GenotypeError::NoChromosomes)?;
        let (n_individuals, ploidy) = (first.n_individuals, first.ploidy);

        for (chromosome, block) in chromosomes.iter().enumerate() {
            if block.n_individuals != n_individuals {
                return Err(GenotypeError::IndividualCountMismatch {
                    chromosome,
                    expected: n_individuals,
                    actual: block.n_individuals,
                });
            }
            if block.ploidy != ploidy {
                return Err(GenotypeError::PloidyMismatch {
                    chromosome,
                    expected: ploidy,
                    actual: block.ploidy,
                });
            }
        }

        let loci_per_chr = chromosomes.iter().map(|c| c.n_loci).collect();
        Ok(Self {
            chromosomes,
            loci_per_chr,
        })
    }

    /// Build a store by evaluating `f(chromosome, locus, homolog, individual)`
    /// for every allele.
    pub fn from_fn<F>(
        loci_per_chr: &[usize],
        ploidy: usize,
        n_individuals: usize,
        mut f: F,
    ) -> Result<Self, GenotypeError>
    where
        F: FnMut(usize, usize, usize, usize) -> Allele,
    {
        let blocks = loci_per_chr
            .iter()
            .enumerate()
            .map(|(chr, &n_loci)| {
                let mut data = Vec::with_capacity(n_loci * ploidy * n_individuals);
                for ind in 0..n_individuals {
                    for h in 0..ploidy {
                        data.extend((0..n_loci).map(|locus| f(chr, locus, h, ind)));
                    }
                }
                ChromosomeBlock::from_data(n_loci, ploidy, n_individuals, data)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_blocks(blocks)
    }

    #[inline]
    pub fn n_chromosomes(&self) -> usize {
        self.chromosomes.len()
    }

    #[inline]
    pub fn n_individuals(&self) -> usize {
        self.chromosomes[0].n_individuals
    }

    #[inline]
    pub fn ploidy(&self) -> usize {
        self.chromosomes[0].ploidy
    }

    /// Locus count of every chromosome, in order.
    #[inline]
    pub fn loci_per_chromosome(&self) -> &[usize] {
        &self.loci_per_chr
    }

    /// Total number of loci across all chromosomes.
    pub fn total_loci(&self) -> usize {
        self.loci_per_chr.iter().sum()
    }

    /// Borrow the block for chromosome `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn chromosome(&self, index: usize) -> &ChromosomeBlock {
        &self.chromosomes[index]
    }

    #[inline]
    pub fn chromosomes(&self) -> &[ChromosomeBlock] {
        &self.chromosomes
    }

    /// Borrow one homolog of one individual on one chromosome.
    #[inline]
    pub fn homolog(&self, chromosome: usize, individual: usize, homolog: usize) -> &[Allele] {
        self.chromosomes[chromosome].homolog(individual, homolog)
    }

    /// `true` if every locus of `individual` carries identical alleles on
    /// all homologs.
    pub fn is_homozygous(&self, individual: usize) -> bool {
        self.chromosomes.iter().all(|block| {
            let first = block.homolog(individual, 0);
            (1..block.ploidy).all(|h| block.homolog(individual, h) == first)
        })
    }
}
