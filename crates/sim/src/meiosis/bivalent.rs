//! Gamete formation from a pair of homologous chromosomes.

use crate::base::Allele;
use crate::meiosis::{interval_search, CrossoverModel, Haldane};
pub use crate::errors::MeiosisError;
use rand::Rng;

/// Simulates meiosis of one bivalent (a synapsed homolog pair).
///
/// Holds a reference to the crossover model and a scratch buffer for
/// crossover positions, so one `Bivalent` can be reused for many gametes
/// within a single task.
#[derive(Debug)]
pub struct Bivalent<'m, M: CrossoverModel = Haldane> {
    model: &'m M,
    crossovers: Vec<f64>,
}

impl<'m, M: CrossoverModel> Bivalent<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self {
            model,
            crossovers: Vec::new(),
        }
    }

    /// Write one recombinant gamete from `chr1`/`chr2` into `gamete`.
    ///
    /// `map` holds the cumulative genetic position of every locus; its last
    /// entry is the chromosome length used by the crossover model. Crossovers
    /// are processed in increasing position; each one ends the current
    /// segment at the map interval containing it and switches the source
    /// homolog. Several crossovers falling in the same inter-locus interval
    /// copy nothing but still switch the source.
    ///
    /// With no crossover the gamete is an exact copy of one homolog, chosen
    /// by a fair coin. Otherwise the starting homolog is chosen by a fair coin.
    ///
    /// Returns the number of crossovers that occurred.
    ///
    /// # Errors
    /// Returns an error if the four slices differ in length, if the crossover
    /// model rejects the chromosome length, or if a crossover lands before
    /// the first map position.
    pub fn gamete_into<R: Rng + ?Sized>(
        &mut self,
        chr1: &[Allele],
        chr2: &[Allele],
        map: &[f64],
        rng: &mut R,
        gamete: &mut [Allele],
    ) -> Result<usize, MeiosisError> {
        let n_sites = chr1.len();
        if chr2.len() != n_sites || map.len() != n_sites || gamete.len() != n_sites {
            return Err(MeiosisError::LengthMismatch {
                chr1: n_sites,
                chr2: chr2.len(),
                map: map.len(),
                gamete: gamete.len(),
            });
        }
        if n_sites == 0 {
            return Ok(0);
        }

        self.crossovers.clear();
        self.model
            .sample_crossovers(map[n_sites - 1], rng, &mut self.crossovers)?;

        if self.crossovers.is_empty() {
            let source = if rng.random_bool(0.5) { chr1 } else { chr2 };
            gamete.copy_from_slice(source);
            return Ok(0);
        }

        self.crossovers.sort_unstable_by(f64::total_cmp);
        let source = |first: bool| if first { chr1 } else { chr2 };

        let mut read_first = rng.random_bool(0.5);
        gamete[0] = source(read_first)[0];
        let mut start = 0;
        for &position in &self.crossovers {
            let end = interval_search(map, position, start)
                .ok_or(MeiosisError::CrossoverBeforeMapStart { position })?;
            if end > start {
                gamete[start + 1..=end].copy_from_slice(&source(read_first)[start + 1..=end]);
            }
            start = end;
            read_first = !read_first;
        }
        if start < n_sites - 1 {
            gamete[start + 1..].copy_from_slice(&source(read_first)[start + 1..]);
        }

        Ok(self.crossovers.len())
    }

    /// Allocate and return one recombinant gamete.
    ///
    /// See [`Bivalent::gamete_into`].
    pub fn gamete<R: Rng + ?Sized>(
        &mut self,
        chr1: &[Allele],
        chr2: &[Allele],
        map: &[f64],
        rng: &mut R,
    ) -> Result<Vec<Allele>, MeiosisError> {
        let mut gamete = vec![0; chr1.len()];
        self.gamete_into(chr1, chr2, map, rng, &mut gamete)?;
        Ok(gamete)
    }
}

/// Simulate one gamete under Haldane's model.
pub fn bivalent<R: Rng + ?Sized>(
    chr1: &[Allele],
    chr2: &[Allele],
    map: &[f64],
    rng: &mut R,
) -> Result<Vec<Allele>, MeiosisError> {
    Bivalent::new(&Haldane).gamete(chr1, chr2, map, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    /// Places crossovers at fixed positions, ignoring the chromosome length.
    struct FixedCrossovers(Vec<f64>);

    impl CrossoverModel for FixedCrossovers {
        fn sample_crossovers<R: Rng + ?Sized>(
            &self,
            _length: f64,
            _rng: &mut R,
            positions: &mut Vec<f64>,
        ) -> Result<(), MeiosisError> {
            positions.extend_from_slice(&self.0);
            Ok(())
        }
    }

    #[test]
    fn test_no_crossover_copies_one_homolog() {
        let chr1 = [0u8, 0, 1, 1, 0, 1];
        let chr2 = [1u8, 1, 0, 0, 1, 0];
        let map = [0.0; 6];
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut seen = [false, false];

        for _ in 0..200 {
            let gamete = bivalent(&chr1, &chr2, &map, &mut rng).unwrap();
            if gamete == chr1 {
                seen[0] = true;
            } else if gamete == chr2 {
                seen[1] = true;
            } else {
                panic!("gamete {gamete:?} mixes homologs without a crossover");
            }
        }
        assert!(seen[0] && seen[1], "both homologs should be transmitted");
    }

    #[test]
    fn test_single_forced_crossover() {
        let chr1 = [0u8, 0];
        let chr2 = [1u8, 1];
        let map = [0.0, 1.0];
        let model = FixedCrossovers(vec![0.5]);
        let mut bivalent = Bivalent::new(&model);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let trials = 10_000;
        let mut starts_first = 0;
        for _ in 0..trials {
            let gamete = bivalent.gamete(&chr1, &chr2, &map, &mut rng).unwrap();
            match gamete.as_slice() {
                [0, 1] => starts_first += 1,
                [1, 0] => {}
                other => panic!("unexpected gamete {other:?}"),
            }
        }
        let freq = starts_first as f64 / trials as f64;
        assert!((freq - 0.5).abs() < 0.03, "start coin frequency {freq}");
    }

    #[test]
    fn test_crossovers_alternate_segments() {
        let chr1 = [0u8; 6];
        let chr2 = [1u8; 6];
        let map = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
        // Unsorted on purpose; breakpoints after loci 1 and 3.
        let model = FixedCrossovers(vec![0.35, 0.15]);
        let mut bivalent = Bivalent::new(&model);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);

        for _ in 0..20 {
            let gamete = bivalent.gamete(&chr1, &chr2, &map, &mut rng).unwrap();
            let a = gamete[0];
            let b = 1 - a;
            assert_eq!(gamete, vec![a, a, b, b, a, a]);
        }
    }

    #[test]
    fn test_double_crossover_in_same_interval_cancels() {
        let chr1 = [0u8; 4];
        let chr2 = [1u8; 4];
        let map = [0.0, 0.1, 0.2, 0.3];
        let model = FixedCrossovers(vec![0.12, 0.18]);
        let mut bivalent = Bivalent::new(&model);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);

        for _ in 0..20 {
            let gamete = bivalent.gamete(&chr1, &chr2, &map, &mut rng).unwrap();
            assert!(gamete == chr1 || gamete == chr2, "got {gamete:?}");
        }

        // Three crossovers in one interval act like one.
        let model = FixedCrossovers(vec![0.11, 0.15, 0.19]);
        let mut bivalent = Bivalent::new(&model);
        for _ in 0..20 {
            let gamete = bivalent.gamete(&chr1, &chr2, &map, &mut rng).unwrap();
            let a = gamete[0];
            assert_eq!(gamete, vec![a, a, 1 - a, 1 - a]);
        }
    }

    #[test]
    fn test_zero_distance_loci_stay_together() {
        let chr1 = [0u8; 5];
        let chr2 = [1u8; 5];
        let map = [0.0, 0.2, 0.2, 0.2, 0.4];
        // Crossover exactly at the shared position falls after the tied block.
        let model = FixedCrossovers(vec![0.2]);
        let mut bivalent = Bivalent::new(&model);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);

        let gamete = bivalent.gamete(&chr1, &chr2, &map, &mut rng).unwrap();
        let a = gamete[0];
        assert_eq!(gamete, vec![a, a, a, a, 1 - a]);
    }

    #[test]
    fn test_crossover_before_map_start() {
        let model = FixedCrossovers(vec![-0.1]);
        let mut bivalent = Bivalent::new(&model);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let result = bivalent.gamete(&[0, 0], &[1, 1], &[0.0, 1.0], &mut rng);
        assert_eq!(
            result,
            Err(MeiosisError::CrossoverBeforeMapStart { position: -0.1 })
        );
    }

    #[test]
    fn test_length_mismatch() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let result = bivalent(&[0, 0, 0], &[1, 1], &[0.0, 1.0, 2.0], &mut rng);
        assert!(matches!(result, Err(MeiosisError::LengthMismatch { .. })));
    }

    #[test]
    fn test_empty_and_single_locus() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert_eq!(bivalent(&[], &[], &[], &mut rng).unwrap(), Vec::<u8>::new());

        let gamete = bivalent(&[0], &[1], &[0.0], &mut rng).unwrap();
        assert!(gamete == [0] || gamete == [1]);
    }

    #[test]
    fn test_crossover_count_matches_length() {
        let n = 101;
        let map: Vec<f64> = (0..n).map(|i| i as f64 * 0.02).collect();
        let chr1 = vec![0u8; n];
        let chr2 = vec![1u8; n];
        let mut bivalent = Bivalent::new(&Haldane);
        let mut gamete = vec![0u8; n];
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

        let trials = 10_000;
        let mut total = 0;
        for _ in 0..trials {
            total += bivalent
                .gamete_into(&chr1, &chr2, &map, &mut rng, &mut gamete)
                .unwrap();
        }
        let mean = total as f64 / trials as f64;
        assert!((mean - 2.0).abs() < 0.1, "mean crossovers {mean} should be near 2.0");
    }

    #[test]
    fn test_oversized_map_is_reported() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let result = bivalent(&[0, 0], &[1, 1], &[0.0, 1.0e20], &mut rng);
        assert!(matches!(result, Err(MeiosisError::MapTooLong { .. })));
    }
}
