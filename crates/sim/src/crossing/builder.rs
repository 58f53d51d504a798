//! Builder pattern for creating crossing engines.
//!
//! Provides a fluent API for configuring a [`CrossingEngine`] with sensible
//! defaults and validation.

pub use crate::errors::BuilderError;
use crate::crossing::{CrossingConfig, CrossingEngine};
use crate::genome::GeneticMap;
use crate::meiosis::{CrossoverModel, Haldane, RecombinationRatio};
use rayon::ThreadPoolBuilder;
use std::sync::Arc;
use tracing::debug;

/// Builder for constructing [`CrossingEngine`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use breedsim_sim::crossing::CrossingBuilder;
/// use breedsim_sim::genome::GeneticMap;
///
/// let engine = CrossingBuilder::new()
///     .genetic_maps(vec![GeneticMap::uniform(100, 1.2).unwrap()])
///     .recombination_ratio(1.5)
///     .threads(2)
///     .build()
///     .unwrap();
/// assert_eq!(engine.n_chromosomes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CrossingBuilder<M: CrossoverModel = Haldane> {
    // Required
    maps: Option<Vec<GeneticMap>>,

    ratio: f64,            // Default: 1.0 (equal recombination in both sexes)
    threads: Option<usize>, // Default: None (rayon global pool)
    model: M,
}

impl Default for CrossingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossingBuilder {
    /// Create a new builder using Haldane's crossover model.
    pub fn new() -> Self {
        Self {
            maps: None,
            ratio: RecombinationRatio::EQUAL.value(),
            threads: None,
            model: Haldane,
        }
    }

    /// Create a builder pre-populated from a serialized configuration.
    pub fn from_config(config: &CrossingConfig) -> Self {
        let mut builder = Self::new().recombination_ratio(config.recombination_ratio.value());
        if let Some(threads) = config.threads {
            builder = builder.threads(threads);
        }
        builder
    }
}

impl<M: CrossoverModel> CrossingBuilder<M> {
    /// Set the sex-averaged genetic maps, one per chromosome (required).
    pub fn genetic_maps(mut self, maps: Vec<GeneticMap>) -> Self {
        self.maps = Some(maps);
        self
    }

    /// Set the female:male recombination ratio (default: 1.0).
    pub fn recombination_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Run operations on a dedicated pool of `threads` workers.
    ///
    /// Without this the engine uses rayon's global pool.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Replace the crossover model.
    pub fn crossover_model<N: CrossoverModel>(self, model: N) -> CrossingBuilder<N> {
        CrossingBuilder {
            maps: self.maps,
            ratio: self.ratio,
            threads: self.threads,
            model,
        }
    }

    /// Build and validate the engine.
    pub fn build(self) -> Result<CrossingEngine<M>, BuilderError> {
        let maps = self
            .maps
            .ok_or(BuilderError::MissingRequired("genetic_maps"))?;
        if maps.is_empty() {
            return Err(BuilderError::InvalidParameter(
                "genetic_maps: at least one chromosome is required".into(),
            ));
        }
        let ratio = RecombinationRatio::new(self.ratio)?;

        let pool = match self.threads {
            Some(0) => {
                return Err(BuilderError::InvalidParameter(
                    "threads: must be at least 1".into(),
                ))
            }
            Some(n) => Some(Arc::new(ThreadPoolBuilder::new().num_threads(n).build()?)),
            None => None,
        };

        debug!(
            n_chromosomes = maps.len(),
            ratio = ratio.value(),
            threads = ?self.threads,
            "building crossing engine"
        );
        Ok(CrossingEngine::new(maps, ratio, self.model, pool)?)
    }
}
