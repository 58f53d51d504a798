//! Error types for the crossing engine.
//!
//! Each domain has its own enum; [`CrossError`] aggregates them for the
//! engine entry points so callers can use `?` across layers.

use crate::base::ParentRole;
use thiserror::Error;

/// Errors raised while constructing a [`GeneticMap`](crate::genome::GeneticMap).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Genetic map has no positions")]
    Empty,
    #[error("Genetic map must start at 0 Morgans, found {0}")]
    NonZeroStart(f64),
    #[error("Non-finite map position {value} at index {index}")]
    NotFinite { index: usize, value: f64 },
    #[error("Map position {value} at index {index} is smaller than the previous ({previous})")]
    Decreasing {
        index: usize,
        previous: f64,
        value: f64,
    },
    #[error("Invalid map scaling factor: {0} (must be finite and positive)")]
    InvalidScale(f64),
    #[error("Genetic map length {length} Morgans exceeds the maximum of {max}")]
    TooLong { length: f64, max: f64 },
}

/// Errors raised while constructing or reading genotype stores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenotypeError {
    #[error("Genotype store needs at least one chromosome")]
    NoChromosomes,
    #[error("Chromosome block data has {actual} alleles, expected {expected}")]
    DataLength { expected: usize, actual: usize },
    #[error("Chromosome {chromosome} has {actual} individuals, expected {expected}")]
    IndividualCountMismatch {
        chromosome: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Chromosome {chromosome} has ploidy {actual}, expected {expected}")]
    PloidyMismatch {
        chromosome: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid ploidy: {0}")]
    InvalidPloidy(usize),
    #[error("Invalid allele frequency: {0} (must be between 0.0 and 1.0)")]
    InvalidAlleleFrequency(f64),
}

/// Errors raised by gamete simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeiosisError {
    #[error("Length mismatch: homologs {chr1} and {chr2}, map {map}, gamete {gamete}")]
    LengthMismatch {
        chr1: usize,
        chr2: usize,
        map: usize,
        gamete: usize,
    },
    #[error("Crossover at {position} Morgans falls before the start of the genetic map")]
    CrossoverBeforeMapStart { position: f64 },
    #[error("Chromosome length {length} Morgans exceeds the maximum of {max}")]
    MapTooLong { length: f64, max: f64 },
    #[error("Invalid recombination ratio: {0} (must be finite and positive)")]
    InvalidRatio(f64),
}

/// Errors raised while validating a pedigree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PedigreeError {
    #[error("Pedigree has {mothers} mother references but {fathers} father references")]
    LengthMismatch { mothers: usize, fathers: usize },
    #[error(
        "Entry {individual} references {role} {parent}, which is not an earlier pedigree entry"
    )]
    UnresolvedParent {
        individual: usize,
        role: ParentRole,
        parent: usize,
    },
}

/// Errors raised by locus selections and genotype accessors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("Loci per chromosome sum to {expected}, but {actual} locations were given")]
    CountMismatch { expected: usize, actual: usize },
    #[error("Selection covers {selection} chromosomes, genotype store has {store}")]
    ChromosomeCountMismatch { selection: usize, store: usize },
    #[error("Locus {locus} on chromosome {chromosome} is out of range ({n_loci} loci)")]
    LocusOutOfRange {
        chromosome: usize,
        locus: usize,
        n_loci: usize,
    },
    #[error("Homolog {homolog} is out of range for ploidy {ploidy}")]
    HomologOutOfRange { homolog: usize, ploidy: usize },
    #[error("Dosage of individual {individual} at chromosome {chromosome} locus {locus} overflows")]
    DosageOverflow {
        chromosome: usize,
        locus: usize,
        individual: usize,
    },
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Errors raised while converting external 1-based indices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    #[error("Index 0 at position {position} of {what} is not a valid 1-based index")]
    Zero { what: &'static str, position: usize },
}

/// Errors raised by the crossing engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CrossError {
    #[error("Got {mothers} mothers but {fathers} fathers (one of each per offspring)")]
    ParentCountMismatch { mothers: usize, fathers: usize },
    #[error("{role} index {index} is out of range ({n_individuals} individuals)")]
    ParentOutOfRange {
        role: ParentRole,
        index: usize,
        n_individuals: usize,
    },
    #[error("Genotype store has {store} chromosomes, but {maps} genetic maps were configured")]
    ChromosomeCountMismatch { maps: usize, store: usize },
    #[error("Chromosome {chromosome} has {store} loci, but its genetic map has {map} positions")]
    LocusCountMismatch {
        chromosome: usize,
        map: usize,
        store: usize,
    },
    #[error("Unsupported ploidy {0}: only diploid meiosis is simulated")]
    UnsupportedPloidy(usize),
    #[error("Pedigree draws founders, but the founder store is empty")]
    NoFounders,
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Meiosis(#[from] MeiosisError),
    #[error(transparent)]
    Genotype(#[from] GenotypeError),
}

/// Errors raised while building a [`CrossingEngine`](crate::crossing::CrossingEngine).
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Meiosis(#[from] MeiosisError),
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapError::Decreasing {
            index: 3,
            previous: 0.5,
            value: 0.4,
        };
        assert!(format!("{err}").contains("smaller than the previous"));

        let err = CrossError::ParentOutOfRange {
            role: ParentRole::Father,
            index: 7,
            n_individuals: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("father index 7"));
        assert!(msg.contains("5 individuals"));
    }

    #[test]
    fn test_cross_error_from_meiosis() {
        let err: CrossError = MeiosisError::InvalidRatio(-1.0).into();
        assert!(matches!(err, CrossError::Meiosis(MeiosisError::InvalidRatio(_))));
        assert!(format!("{err}").contains("Invalid recombination ratio"));
    }
}
