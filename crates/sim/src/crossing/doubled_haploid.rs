//! Doubled-haploid line production.

use crate::base::Sex;
use crate::crossing::CrossingEngine;
pub use crate::errors::CrossError;
use crate::genome::GenotypeStore;
use crate::meiosis::CrossoverModel;
use rand::Rng;
use tracing::debug;

impl<M: CrossoverModel> CrossingEngine<M> {
    /// Produce `n_dh` doubled-haploid lines from every individual in `geno`.
    ///
    /// Each line comes from a single meiosis using the map of `sex`; its
    /// gamete is duplicated into both homologs, so every output individual
    /// is fully homozygous. Output is ordered source-major: all `n_dh` lines
    /// of individual 0, then those of individual 1, and so on.
    ///
    /// # Errors
    /// Returns an error if `n_dh` is zero or `geno` does not match the
    /// engine's maps.
    pub fn doubled_haploids<R: Rng + ?Sized>(
        &self,
        geno: &GenotypeStore,
        n_dh: usize,
        sex: Sex,
        rng: &mut R,
    ) -> Result<GenotypeStore, CrossError> {
        if n_dh == 0 {
            return Err(CrossError::InvalidParameter(
                "n_dh must be at least 1".to_string(),
            ));
        }
        self.check_store(geno)?;

        let n_lines = geno.n_individuals() * n_dh;
        debug!(
            n_sources = geno.n_individuals(),
            n_dh,
            %sex,
            threads = self.threads(),
            "creating doubled haploids"
        );

        let maps = self.sex_maps(sex);
        let seeds = self.draw_seeds(n_lines, rng);
        let blocks = self.build_blocks(n_lines, &seeds, |chr, line, bivalent, rng, slot| {
            let source = line / n_dh;
            let block = geno.chromosome(chr);
            let (first, second) = slot.split_at_mut(slot.len() / 2);
            bivalent.gamete_into(
                block.homolog(source, 0),
                block.homolog(source, 1),
                maps[chr].positions(),
                rng,
                first,
            )?;
            second.copy_from_slice(first);
            Ok(())
        })?;

        Ok(GenotypeStore::from_blocks(blocks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossing::CrossingBuilder;
    use crate::genome::{random_founders, GeneticMap};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn engine() -> CrossingEngine {
        CrossingBuilder::new()
            .genetic_maps(vec![
                GeneticMap::uniform(30, 1.5).unwrap(),
                GeneticMap::uniform(12, 0.8).unwrap(),
            ])
            .recombination_ratio(2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_doubled_haploids_are_homozygous() {
        let engine = engine();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let founders = random_founders(&[30, 12], 6, 0.5, &mut rng).unwrap();

        for sex in [Sex::Female, Sex::Male] {
            let lines = engine.doubled_haploids(&founders, 4, sex, &mut rng).unwrap();
            assert_eq!(lines.n_individuals(), 24);
            for ind in 0..lines.n_individuals() {
                assert!(lines.is_homozygous(ind), "line {ind} is not homozygous");
            }
        }
    }

    #[test]
    fn test_doubled_haploid_ordering() {
        let engine = engine();
        // Source individual i is fixed for allele i.
        let sources = GenotypeStore::from_fn(&[30, 12], 2, 3, |_, _, _, ind| ind as u8).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let lines = engine.doubled_haploids(&sources, 2, Sex::Female, &mut rng).unwrap();

        for line in 0..6 {
            let expected = (line / 2) as u8;
            for chr in 0..2 {
                assert!(lines.homolog(chr, line, 0).iter().all(|&a| a == expected));
            }
        }
    }

    #[test]
    fn test_doubled_haploid_zero_lines() {
        let engine = engine();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let founders = random_founders(&[30, 12], 2, 0.5, &mut rng).unwrap();
        assert!(matches!(
            engine.doubled_haploids(&founders, 0, Sex::Male, &mut rng),
            Err(CrossError::InvalidParameter(_))
        ));
    }
}
