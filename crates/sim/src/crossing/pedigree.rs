//! Pedigree-driven crossing.
//!
//! A pedigree lists individuals in order, each with a mother and a father
//! reference. A reference is either an earlier pedigree entry or
//! [`ParentRef::Founder`], meaning "no parent recorded": the gamete then
//! comes from a founder drawn uniformly at random.

use crate::base::{ParentRole, DIPLOID};
use crate::crossing::CrossingEngine;
pub use crate::errors::{CrossError, PedigreeError};
use crate::genome::{ChromosomeBlock, GenotypeStore};
use crate::meiosis::{Bivalent, CrossoverModel};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reference to the parent of a pedigree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentRef {
    /// No parent recorded; draw a random founder.
    Founder,
    /// An earlier entry of the same pedigree (0-based).
    Individual(usize),
}

/// An ordered pedigree whose parent references always point backwards.
///
/// Construction validates that every [`ParentRef::Individual`] refers to a
/// strictly earlier entry, so entries can be generated in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pedigree {
    mothers: Vec<ParentRef>,
    fathers: Vec<ParentRef>,
}

impl Pedigree {
    /// Create a pedigree from per-entry mother and father references.
    ///
    /// # Errors
    /// Returns an error if the lists differ in length or an entry references
    /// itself or a later entry.
    pub fn new(mothers: Vec<ParentRef>, fathers: Vec<ParentRef>) -> Result<Self, PedigreeError> {
        if mothers.len() != fathers.len() {
            return Err(PedigreeError::LengthMismatch {
                mothers: mothers.len(),
                fathers: fathers.len(),
            });
        }
        for (individual, (&mother, &father)) in mothers.iter().zip(&fathers).enumerate() {
            for (role, parent) in [(ParentRole::Mother, mother), (ParentRole::Father, father)] {
                if let ParentRef::Individual(parent) = parent {
                    if parent >= individual {
                        return Err(PedigreeError::UnresolvedParent {
                            individual,
                            role,
                            parent,
                        });
                    }
                }
            }
        }
        Ok(Self { mothers, fathers })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mothers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mothers.is_empty()
    }

    #[inline]
    pub fn mother(&self, individual: usize) -> ParentRef {
        self.mothers[individual]
    }

    #[inline]
    pub fn father(&self, individual: usize) -> ParentRef {
        self.fathers[individual]
    }

    /// Iterate over (mother, father) references in pedigree order.
    pub fn entries(&self) -> impl Iterator<Item = (ParentRef, ParentRef)> + '_ {
        self.mothers.iter().copied().zip(self.fathers.iter().copied())
    }

    /// Number of gametes that will be drawn from random founders.
    pub fn n_founder_draws(&self) -> usize {
        self.mothers
            .iter()
            .chain(&self.fathers)
            .filter(|p| matches!(p, ParentRef::Founder))
            .count()
    }
}

/// Resolved gamete source for one parental role of one entry.
#[derive(Debug, Clone, Copy)]
enum GameteSource {
    Founder(usize),
    Entry(usize),
}

impl<M: CrossoverModel> CrossingEngine<M> {
    /// Generate every individual of `pedigree`, in order.
    ///
    /// Gametes for [`ParentRef::Founder`] references come from a founder
    /// drawn uniformly from `founders`; one draw is made per entry and
    /// parental role and shared by all chromosomes. Other references read the
    /// already generated genotype of an earlier entry. Mothers meiose on the
    /// female-scaled map, fathers on the male-scaled map.
    ///
    /// Chromosomes are simulated in parallel; entries within a chromosome are
    /// sequential because later entries may descend from earlier ones.
    ///
    /// # Errors
    /// Returns an error if `founders` does not match the engine's maps, or if
    /// a founder draw is needed and `founders` is empty.
    pub fn cross_pedigree<R: Rng + ?Sized>(
        &self,
        founders: &GenotypeStore,
        pedigree: &Pedigree,
        rng: &mut R,
    ) -> Result<GenotypeStore, CrossError> {
        self.check_store(founders)?;
        let n_founders = founders.n_individuals();
        let n = pedigree.len();
        debug!(
            n_entries = n,
            n_founders,
            founder_draws = pedigree.n_founder_draws(),
            "crossing pedigree"
        );

        let mut sources = Vec::with_capacity(n);
        for (mother, father) in pedigree.entries() {
            let mut resolve = |parent: ParentRef| match parent {
                ParentRef::Individual(j) => Ok(GameteSource::Entry(j)),
                ParentRef::Founder if n_founders == 0 => Err(CrossError::NoFounders),
                ParentRef::Founder => Ok(GameteSource::Founder(rng.random_range(0..n_founders))),
            };
            let mother = resolve(mother)?;
            let father = resolve(father)?;
            sources.push((mother, father));
        }

        let seeds: Vec<u64> = (0..self.n_chromosomes()).map(|_| rng.random()).collect();
        let blocks = self.install(|| {
            self.genetic_maps()
                .par_iter()
                .zip(seeds.par_iter())
                .enumerate()
                .map(|(chr, (map, &seed))| -> Result<ChromosomeBlock, CrossError> {
                    let n_loci = map.len();
                    let slot_len = DIPLOID * n_loci;
                    let founder_block = founders.chromosome(chr);
                    let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                    let mut bivalent = Bivalent::new(self.crossover_model());
                    let mut data = vec![0u8; n * slot_len];

                    for (i, &(mother, father)) in sources.iter().enumerate() {
                        let (done, rest) = data.split_at_mut(i * slot_len);
                        let slot = &mut rest[..slot_len];
                        for (role, source) in
                            [(ParentRole::Mother, mother), (ParentRole::Father, father)]
                        {
                            let parent = match source {
                                GameteSource::Founder(j) => founder_block.individual(j),
                                GameteSource::Entry(j) => &done[j * slot_len..(j + 1) * slot_len],
                            };
                            let (chr1, chr2) = parent.split_at(n_loci);
                            let map = self.sex_maps(role.sex())[chr].positions();
                            let start = role.homolog() * n_loci;
                            let gamete = &mut slot[start..start + n_loci];
                            bivalent.gamete_into(chr1, chr2, map, &mut local_rng, gamete)?;
                        }
                    }

                    Ok(ChromosomeBlock::from_data(n_loci, DIPLOID, n, data)?)
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        Ok(GenotypeStore::from_blocks(blocks)?)
    }
}
