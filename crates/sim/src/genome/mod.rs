//! Genotype data model: genetic maps, chromosome blocks and genotype stores.

pub mod founders;
mod genetic_map;
mod store;

pub use founders::random_founders;
pub use genetic_map::GeneticMap;
pub use store::{ChromosomeBlock, GenotypeStore};
