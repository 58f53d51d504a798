//! # Breeding Simulation Crate
//!
//! The `sim` crate provides the core meiosis and crossing logic for
//! breeding-program simulation. It includes modules for phased genotype
//! storage and genetic maps, gamete formation under a crossover model,
//! crossing engines (biparental crosses, doubled haploids, pedigrees) and
//! matrix accessors over the resulting genotypes.

pub mod access;
pub mod base;
pub mod crossing;
pub mod errors;
pub mod genome;
pub mod interface;
pub mod meiosis;
pub mod prelude;

pub use base::{Allele, Sex};
