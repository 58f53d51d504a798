//! Read-only matrix views over genotype stores.
//!
//! Accessors take a [`LociSelection`] and return dense `nalgebra` matrices
//! suitable as dosage or design-matrix inputs.

mod matrices;
mod selection;

pub use matrices::{dominance_indicator, dosage, haplotypes, single_haplotype};
pub use selection::LociSelection;
