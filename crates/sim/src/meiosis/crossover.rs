//! Crossover placement models.

pub use crate::errors::MeiosisError;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

/// Longest chromosome, in Morgans, that maps and crossover models accept.
pub const MAX_CHROMOSOME_LENGTH: f64 = 1.0e6;

/// A point process placing crossovers along a chromosome.
///
/// Implementations append crossover positions (Morgans, in `[0, length)`)
/// to `positions`. Order does not matter; the gamete simulator sorts them.
pub trait CrossoverModel: Send + Sync {
    fn sample_crossovers<R: Rng + ?Sized>(
        &self,
        length: f64,
        rng: &mut R,
        positions: &mut Vec<f64>,
    ) -> Result<(), MeiosisError>;
}

/// Haldane's model: no interference.
///
/// The crossover count is Poisson with mean equal to the genetic length and
/// positions are independent and uniform along the chromosome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haldane;

impl CrossoverModel for Haldane {
    fn sample_crossovers<R: Rng + ?Sized>(
        &self,
        length: f64,
        rng: &mut R,
        positions: &mut Vec<f64>,
    ) -> Result<(), MeiosisError> {
        // Zero-length (single locus or collapsed) maps never recombine;
        // the negated comparison also rejects NaN.
        if !(length > 0.0) {
            return Ok(());
        }
        let too_long = MeiosisError::MapTooLong {
            length,
            max: MAX_CHROMOSOME_LENGTH,
        };
        if length > MAX_CHROMOSOME_LENGTH {
            return Err(too_long);
        }
        let count = Poisson::new(length).map_err(|_| too_long)?.sample(rng) as usize;
        positions.reserve(count);
        for _ in 0..count {
            positions.push(rng.random::<f64>() * length);
        }
        Ok(())
    }
}
