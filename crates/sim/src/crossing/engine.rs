//! Crossing engine and biparental crosses.
//!
//! The engine owns the genetic maps (shared and sex-scaled), the crossover
//! model and an optional dedicated thread pool. Every operation draws its
//! per-task seeds from the caller's RNG before fanning out, so results for a
//! given seed do not depend on the number of threads.

use crate::base::{ParentRole, Sex, DIPLOID};
pub use crate::errors::CrossError;
use crate::errors::{MapError, MeiosisError};
use crate::genome::{ChromosomeBlock, GeneticMap, GenotypeStore};
use crate::meiosis::{Bivalent, CrossoverModel, Haldane, RecombinationRatio};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;
use tracing::debug;

/// Simulates crosses, doubled haploids and pedigrees for diploid genotypes.
///
/// Construct with [`CrossingBuilder`](crate::crossing::CrossingBuilder).
#[derive(Debug, Clone)]
pub struct CrossingEngine<M: CrossoverModel = Haldane> {
    /// Sex-averaged maps, one per chromosome.
    maps: Vec<GeneticMap>,
    female_maps: Vec<GeneticMap>,
    male_maps: Vec<GeneticMap>,
    ratio: RecombinationRatio,
    model: M,
    /// Dedicated pool; `None` runs on rayon's global pool.
    pool: Option<Arc<ThreadPool>>,
}

impl<M: CrossoverModel> CrossingEngine<M> {
    pub(crate) fn new(
        maps: Vec<GeneticMap>,
        ratio: RecombinationRatio,
        model: M,
        pool: Option<Arc<ThreadPool>>,
    ) -> Result<Self, MapError> {
        let scale = |sex: Sex| {
            maps.iter()
                .map(|m| m.scaled(ratio.scale(sex)))
                .collect::<Result<Vec<_>, _>>()
        };
        let female_maps = scale(Sex::Female)?;
        let male_maps = scale(Sex::Male)?;
        Ok(Self {
            maps,
            female_maps,
            male_maps,
            ratio,
            model,
            pool,
        })
    }

    /// Sex-averaged genetic maps, in chromosome order.
    pub fn genetic_maps(&self) -> &[GeneticMap] {
        &self.maps
    }

    /// Genetic maps scaled for meioses in `sex`.
    pub fn sex_maps(&self, sex: Sex) -> &[GeneticMap] {
        match sex {
            Sex::Female => &self.female_maps,
            Sex::Male => &self.male_maps,
        }
    }

    pub fn recombination_ratio(&self) -> RecombinationRatio {
        self.ratio
    }

    pub fn crossover_model(&self) -> &M {
        &self.model
    }

    /// Number of worker threads used by this engine.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub fn n_chromosomes(&self) -> usize {
        self.maps.len()
    }

    /// Cross mothers with fathers, producing one offspring per pair.
    ///
    /// Offspring `i` receives a gamete from `mothers[i]` of `mother_geno`
    /// (female-scaled map) in homolog 0 and a gamete from `fathers[i]` of
    /// `father_geno` (male-scaled map) in homolog 1. Indices are 0-based.
    ///
    /// # Errors
    /// Returns an error if the parent lists differ in length, an index is out
    /// of range, or a store does not match the engine's maps.
    pub fn cross<R: Rng + ?Sized>(
        &self,
        mother_geno: &GenotypeStore,
        mothers: &[usize],
        father_geno: &GenotypeStore,
        fathers: &[usize],
        rng: &mut R,
    ) -> Result<GenotypeStore, CrossError> {
        if mothers.len() != fathers.len() {
            return Err(CrossError::ParentCountMismatch {
                mothers: mothers.len(),
                fathers: fathers.len(),
            });
        }
        self.check_store(mother_geno)?;
        self.check_store(father_geno)?;
        check_parents(mothers, ParentRole::Mother, mother_geno.n_individuals())?;
        check_parents(fathers, ParentRole::Father, father_geno.n_individuals())?;

        let n_offspring = mothers.len();
        debug!(
            n_offspring,
            n_chromosomes = self.n_chromosomes(),
            threads = self.threads(),
            "crossing"
        );

        let seeds = self.draw_seeds(n_offspring, rng);
        let parents = [
            (ParentRole::Mother, mother_geno, mothers),
            (ParentRole::Father, father_geno, fathers),
        ];
        let blocks = self.build_blocks(n_offspring, &seeds, |chr, ind, bivalent, rng, slot| {
            let n_loci = slot.len() / DIPLOID;
            for (role, geno, indices) in parents {
                let block = geno.chromosome(chr);
                let start = role.homolog() * n_loci;
                bivalent.gamete_into(
                    block.homolog(indices[ind], 0),
                    block.homolog(indices[ind], 1),
                    self.sex_maps(role.sex())[chr].positions(),
                    rng,
                    &mut slot[start..start + n_loci],
                )?;
            }
            Ok(())
        })?;

        Ok(GenotypeStore::from_blocks(blocks)?)
    }

    /// Run `op` on the engine's pool, or the global pool if none was built.
    pub(crate) fn install<T, F>(&self, op: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Check that `store` is diploid and matches the configured maps.
    pub(crate) fn check_store(&self, store: &GenotypeStore) -> Result<(), CrossError> {
        if store.ploidy() != DIPLOID {
            return Err(CrossError::UnsupportedPloidy(store.ploidy()));
        }
        if store.n_chromosomes() != self.maps.len() {
            return Err(CrossError::ChromosomeCountMismatch {
                maps: self.maps.len(),
                store: store.n_chromosomes(),
            });
        }
        for (chromosome, (map, &n_loci)) in self
            .maps
            .iter()
            .zip(store.loci_per_chromosome())
            .enumerate()
        {
            if map.len() != n_loci {
                return Err(CrossError::LocusCountMismatch {
                    chromosome,
                    map: map.len(),
                    store: n_loci,
                });
            }
        }
        Ok(())
    }

    /// One seed per (chromosome, individual), chromosome-major.
    pub(crate) fn draw_seeds<R: Rng + ?Sized>(
        &self,
        n_individuals: usize,
        rng: &mut R,
    ) -> Vec<u64> {
        (0..self.maps.len() * n_individuals)
            .map(|_| rng.random())
            .collect()
    }

    /// Build one diploid block per chromosome with `n_individuals` slots.
    ///
    /// `fill(chromosome, individual, bivalent, rng, slot)` writes both
    /// homologs of one individual; slots are filled in parallel, each with
    /// its own RNG seeded from `seeds`.
    pub(crate) fn build_blocks<F>(
        &self,
        n_individuals: usize,
        seeds: &[u64],
        fill: F,
    ) -> Result<Vec<ChromosomeBlock>, CrossError>
    where
        F: Fn(
                usize,
                usize,
                &mut Bivalent<'_, M>,
                &mut Xoshiro256PlusPlus,
                &mut [u8],
            ) -> Result<(), MeiosisError>
            + Sync,
    {
        self.install(|| {
            self.maps
                .iter()
                .enumerate()
                .map(|(chr, map)| -> Result<ChromosomeBlock, CrossError> {
                    let n_loci = map.len();
                    let chr_seeds = &seeds[chr * n_individuals..(chr + 1) * n_individuals];
                    let mut data = vec![0u8; n_individuals * DIPLOID * n_loci];

                    data.par_chunks_mut(DIPLOID * n_loci)
                        .zip(chr_seeds.par_iter())
                        .enumerate()
                        .try_for_each(|(ind, (slot, &seed))| {
                            let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                            let mut bivalent = Bivalent::new(&self.model);
                            fill(chr, ind, &mut bivalent, &mut local_rng, slot)
                        })?;

                    Ok(ChromosomeBlock::from_data(
                        n_loci,
                        DIPLOID,
                        n_individuals,
                        data,
                    )?)
                })
                .collect()
        })
    }
}

fn check_parents(
    indices: &[usize],
    role: ParentRole,
    n_individuals: usize,
) -> Result<(), CrossError> {
    match indices.iter().find(|&&index| index >= n_individuals) {
        Some(&index) => Err(CrossError::ParentOutOfRange {
            role,
            index,
            n_individuals,
        }),
        None => Ok(()),
    }
}
