//! Conversion from external 1-based indices.
//!
//! Callers that number individuals, loci and homologs from 1 go through
//! these functions once; everything else in the crate is 0-based.

pub use crate::errors::{IndexError, PedigreeError, SelectionError};
use crate::access::LociSelection;
use crate::crossing::{ParentRef, Pedigree};

fn to_zero_based(one_based: &[usize], what: &'static str) -> Result<Vec<usize>, IndexError> {
    one_based
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            index
                .checked_sub(1)
                .ok_or(IndexError::Zero { what, position })
        })
        .collect()
}

/// Convert a 1-based parent list to 0-based indices.
pub fn parent_indices(one_based: &[usize]) -> Result<Vec<usize>, IndexError> {
    to_zero_based(one_based, "parent list")
}

/// Convert 1-based pedigree references; 0 means "no parent recorded".
pub fn pedigree_refs(one_based: &[usize]) -> Vec<ParentRef> {
    one_based
        .iter()
        .map(|&index| match index {
            0 => ParentRef::Founder,
            k => ParentRef::Individual(k - 1),
        })
        .collect()
}

/// Build a [`Pedigree`] from 1-based mother and father lists.
///
/// # Errors
/// Returns an error if the lists differ in length or an entry references
/// itself or a later entry.
pub fn pedigree_from_one_based(
    mothers: &[usize],
    fathers: &[usize],
) -> Result<Pedigree, PedigreeError> {
    Pedigree::new(pedigree_refs(mothers), pedigree_refs(fathers))
}

/// Build a [`LociSelection`] from per-chromosome counts and 1-based locations.
pub fn loci_selection(
    loci_per_chr: Vec<usize>,
    one_based: &[usize],
) -> Result<LociSelection, SelectionError> {
    let locations = to_zero_based(one_based, "locus locations")?;
    LociSelection::new(loci_per_chr, locations)
}

/// Convert a 1-based homolog number.
pub fn homolog_index(one_based: usize) -> Result<usize, IndexError> {
    one_based.checked_sub(1).ok_or(IndexError::Zero {
        what: "homolog",
        position: 0,
    })
}
