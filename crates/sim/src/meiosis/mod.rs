//! Meiosis: crossover placement and gamete formation.
//!
//! - **Interval search**: locate the map interval containing a crossover
//! - **Crossover models**: point processes placing crossovers (Haldane)
//! - **Bivalent**: build one recombinant gamete from a homolog pair
//! - **Recombination ratio**: sex-specific scaling of the genetic map

mod bivalent;
mod crossover;
mod interval;
mod ratio;

pub use bivalent::{bivalent, Bivalent};
pub use crossover::{CrossoverModel, Haldane, MAX_CHROMOSOME_LENGTH};
pub use interval::interval_search;
pub use ratio::RecombinationRatio;
