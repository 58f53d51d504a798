//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use breedsim_sim::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let engine = CrossingBuilder::new()
//!     .genetic_maps(vec![GeneticMap::uniform(50, 1.0).unwrap()])
//!     .build()
//!     .unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let founders = random_founders(&[50], 4, 0.5, &mut rng).unwrap();
//! let f1 = engine.cross(&founders, &[0, 1], &founders, &[2, 3], &mut rng).unwrap();
//! assert_eq!(f1.n_individuals(), 2);
//! ```

pub use crate::access::{dominance_indicator, dosage, haplotypes, single_haplotype, LociSelection};
pub use crate::base::{Allele, ParentRole, Sex};
pub use crate::crossing::{CrossingBuilder, CrossingConfig, CrossingEngine, ParentRef, Pedigree};
pub use crate::errors;
pub use crate::genome::{random_founders, ChromosomeBlock, GeneticMap, GenotypeStore};
pub use crate::meiosis::{Bivalent, CrossoverModel, Haldane, RecombinationRatio};
