//! Dense genotype matrices over a locus selection.
//!
//! Columns follow the selection order; rows are individuals (or homolog
//! instances for [`haplotypes`]). Values are small integers stored as `u8`.

use crate::access::LociSelection;
pub use crate::errors::SelectionError;
use crate::genome::GenotypeStore;
use nalgebra::DMatrix;

/// Visit every selected locus as (column, chromosome, locus), stopping at
/// the first error.
fn for_each_column(
    selection: &LociSelection,
    mut visit: impl FnMut(usize, usize, usize) -> Result<(), SelectionError>,
) -> Result<(), SelectionError> {
    for chromosome in 0..selection.n_chromosomes() {
        let offset = selection.column_offset(chromosome);
        for (k, &locus) in selection.chromosome_locations(chromosome).iter().enumerate() {
            visit(offset + k, chromosome, locus)?;
        }
    }
    Ok(())
}

/// Allele dosage: individuals x selected loci, summed across homologs.
///
/// # Errors
/// Returns an error if the selection does not fit `store`, or if a sum of
/// multi-allelic codes exceeds `u8::MAX`.
pub fn dosage(
    store: &GenotypeStore,
    selection: &LociSelection,
) -> Result<DMatrix<u8>, SelectionError> {
    selection.validate_against(store)?;
    let n = store.n_individuals();
    let mut matrix = DMatrix::zeros(n, selection.n_selected());
    for_each_column(selection, |col, chr, locus| {
        let block = store.chromosome(chr);
        for ind in 0..n {
            let sum: u16 = (0..block.ploidy())
                .map(|h| u16::from(block.allele(locus, h, ind)))
                .sum();
            matrix[(ind, col)] =
                u8::try_from(sum).map_err(|_| SelectionError::DosageOverflow {
                    chromosome: chr,
                    locus,
                    individual: ind,
                })?;
        }
        Ok(())
    })?;
    Ok(matrix)
}

/// Phased haplotypes: (individuals x ploidy) x selected loci.
///
/// Row `ind * ploidy + h` holds homolog `h` of individual `ind`.
pub fn haplotypes(
    store: &GenotypeStore,
    selection: &LociSelection,
) -> Result<DMatrix<u8>, SelectionError> {
    selection.validate_against(store)?;
    let ploidy = store.ploidy();
    let n = store.n_individuals();
    let mut matrix = DMatrix::zeros(n * ploidy, selection.n_selected());
    for_each_column(selection, |col, chr, locus| {
        let block = store.chromosome(chr);
        for ind in 0..n {
            for h in 0..ploidy {
                matrix[(ind * ploidy + h, col)] = block.allele(locus, h, ind);
            }
        }
        Ok(())
    })?;
    Ok(matrix)
}

/// One homolog per individual: individuals x selected loci.
///
/// `homolog` is 0-based; for diploids 0 is the maternally inherited copy.
pub fn single_haplotype(
    store: &GenotypeStore,
    selection: &LociSelection,
    homolog: usize,
) -> Result<DMatrix<u8>, SelectionError> {
    if homolog >= store.ploidy() {
        return Err(SelectionError::HomologOutOfRange {
            homolog,
            ploidy: store.ploidy(),
        });
    }
    selection.validate_against(store)?;
    let n = store.n_individuals();
    let mut matrix = DMatrix::zeros(n, selection.n_selected());
    for_each_column(selection, |col, chr, locus| {
        let block = store.chromosome(chr);
        for ind in 0..n {
            matrix[(ind, col)] = block.allele(locus, homolog, ind);
        }
        Ok(())
    })?;
    Ok(matrix)
}

/// Heterozygosity indicator from a diploid dosage matrix.
///
/// Dosage 2 maps to 0, so the result is 1 exactly where an individual is
/// heterozygous.
pub fn dominance_indicator(dosage: &DMatrix<u8>) -> DMatrix<u8> {
    dosage.map(|d| if d == 2 { 0 } else { d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::random_founders;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    /// Two individuals over chromosomes of 3 and 2 loci.
    ///
    /// Allele = (locus + homolog + individual + chromosome) % 2.
    fn store() -> GenotypeStore {
        GenotypeStore::from_fn(&[3, 2], 2, 2, |chr, locus, h, ind| {
            ((locus + h + ind + chr) % 2) as u8
        })
        .unwrap()
    }

    #[test]
    fn test_haplotype_row_order() {
        let store = store();
        let all = LociSelection::all(&store);
        let haps = haplotypes(&store, &all).unwrap();
        assert_eq!(haps.shape(), (4, 5));
        for ind in 0..2 {
            for h in 0..2 {
                let row = ind * 2 + h;
                let expected: Vec<u8> = store
                    .homolog(0, ind, h)
                    .iter()
                    .chain(store.homolog(1, ind, h))
                    .copied()
                    .collect();
                let actual: Vec<u8> = haps.row(row).iter().copied().collect();
                assert_eq!(actual, expected, "row {row}");
            }
        }
    }

    #[test]
    fn test_dosage_equals_sum_of_haplotype_rows() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let store = random_founders(&[7, 4, 9], 12, 0.4, &mut rng).unwrap();
        let all = LociSelection::all(&store);
        let dos = dosage(&store, &all).unwrap();
        let haps = haplotypes(&store, &all).unwrap();

        for ind in 0..store.n_individuals() {
            for col in 0..all.n_selected() {
                let summed = haps[(2 * ind, col)] + haps[(2 * ind + 1, col)];
                assert_eq!(dos[(ind, col)], summed);
            }
        }
    }

    #[test]
    fn test_subset_selection_columns() {
        let store = store();
        // Locus 2 of chromosome 0 and locus 0 of chromosome 1.
        let selection = LociSelection::new(vec![1, 1], vec![2, 0]).unwrap();
        let maternal = single_haplotype(&store, &selection, 0).unwrap();
        let paternal = single_haplotype(&store, &selection, 1).unwrap();
        assert_eq!(maternal.shape(), (2, 2));
        for ind in 0..2 {
            assert_eq!(maternal[(ind, 0)], store.chromosome(0).allele(2, 0, ind));
            assert_eq!(maternal[(ind, 1)], store.chromosome(1).allele(0, 0, ind));
            assert_eq!(paternal[(ind, 0)], store.chromosome(0).allele(2, 1, ind));
        }
        // Neighbouring homologs differ by construction, so every dosage is 1.
        let dos = dosage(&store, &selection).unwrap();
        assert!(dos.iter().all(|&d| d == 1));
    }

    #[test]
    fn test_single_haplotype_rejects_bad_homolog() {
        let store = store();
        let all = LociSelection::all(&store);
        assert_eq!(
            single_haplotype(&store, &all, 2),
            Err(SelectionError::HomologOutOfRange {
                homolog: 2,
                ploidy: 2
            })
        );
    }

    #[test]
    fn test_accessors_validate_selection() {
        let store = store();
        let selection = LociSelection::new(vec![1, 1], vec![3, 0]).unwrap();
        assert!(matches!(
            dosage(&store, &selection),
            Err(SelectionError::LocusOutOfRange { chromosome: 0, locus: 3, .. })
        ));
    }

    #[test]
    fn test_dosage_overflow_is_reported() {
        // Multi-allelic codes of 200 on both homologs of individual 1.
        let store = GenotypeStore::from_fn(&[2], 2, 2, |_, locus, _, ind| {
            if ind == 1 && locus == 1 {
                200
            } else {
                1
            }
        })
        .unwrap();
        let all = LociSelection::all(&store);
        assert_eq!(
            dosage(&store, &all),
            Err(SelectionError::DosageOverflow {
                chromosome: 0,
                locus: 1,
                individual: 1
            })
        );
        // Haplotype access is unaffected.
        assert_eq!(haplotypes(&store, &all).unwrap()[(2, 1)], 200);
    }

    #[test]
    fn test_dominance_indicator() {
        let dos = DMatrix::from_row_slice(2, 3, &[0, 1, 2, 2, 1, 0]);
        let dom = dominance_indicator(&dos);
        assert_eq!(dom, DMatrix::from_row_slice(2, 3, &[0, 1, 0, 0, 1, 0]));
    }
}
