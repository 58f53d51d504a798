//! Crossing operations on diploid genotype stores.
//!
//! - **Engine**: maps, crossover model and thread pool; biparental crosses
//! - **Doubled haploids**: fully homozygous lines from single meioses
//! - **Pedigree**: ordered generation of related individuals from founders
//! - **Builder / config**: engine construction and serialized settings

mod builder;
mod config;
mod doubled_haploid;
mod engine;
mod pedigree;

pub use builder::CrossingBuilder;
pub use config::CrossingConfig;
pub use engine::CrossingEngine;
pub use pedigree::{ParentRef, Pedigree};
