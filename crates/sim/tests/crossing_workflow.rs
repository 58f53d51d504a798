//! End-to-end breeding workflow through the public API.

use breedsim_sim::access::{
    dominance_indicator, dosage, haplotypes, single_haplotype, LociSelection,
};
use breedsim_sim::crossing::CrossingBuilder;
use breedsim_sim::genome::{GeneticMap, GenotypeStore};
use breedsim_sim::interface;
use breedsim_sim::Sex;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Two inbred lines: line 1 fixed for allele 0, line 2 fixed for allele 1.
fn inbred_lines(loci_per_chr: &[usize]) -> GenotypeStore {
    GenotypeStore::from_fn(loci_per_chr, 2, 2, |_, _, _, ind| ind as u8).unwrap()
}

#[test]
fn test_f1_dh_workflow() {
    let loci = [40, 25];
    let engine = CrossingBuilder::new()
        .genetic_maps(vec![
            GeneticMap::uniform(loci[0], 1.5).unwrap(),
            GeneticMap::uniform(loci[1], 1.0).unwrap(),
        ])
        .threads(2)
        .build()
        .unwrap();
    let parents = inbred_lines(&loci);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

    // 1-based parent lists at the boundary: line 1 x line 2.
    let mothers = interface::parent_indices(&[1; 10]).unwrap();
    let fathers = interface::parent_indices(&[2; 10]).unwrap();
    let f1 = engine
        .cross(&parents, &mothers, &parents, &fathers, &mut rng)
        .unwrap();

    // Every F1 is heterozygous everywhere.
    let all = LociSelection::all(&f1);
    let f1_dosage = dosage(&f1, &all).unwrap();
    assert!(f1_dosage.iter().all(|&d| d == 1));
    assert!(dominance_indicator(&f1_dosage).iter().all(|&d| d == 1));

    // Maternal homologs come from line 1, paternal from line 2.
    let maternal = single_haplotype(&f1, &all, interface::homolog_index(1).unwrap()).unwrap();
    let paternal = single_haplotype(&f1, &all, interface::homolog_index(2).unwrap()).unwrap();
    assert!(maternal.iter().all(|&a| a == 0));
    assert!(paternal.iter().all(|&a| a == 1));

    // DH lines are homozygous and segregate.
    let dh = engine.doubled_haploids(&f1, 20, Sex::Female, &mut rng).unwrap();
    assert_eq!(dh.n_individuals(), 200);
    let dh_dosage = dosage(&dh, &all).unwrap();
    assert!(dh_dosage.iter().all(|&d| d == 0 || d == 2));
    assert!(dominance_indicator(&dh_dosage).iter().all(|&d| d == 0));

    let mean = dh_dosage.iter().map(|&d| d as f64).sum::<f64>() / dh_dosage.len() as f64;
    assert!((mean - 1.0).abs() < 0.15, "mean DH dosage {mean} should be near 1");

    // Dosage equals the sum of haplotype rows.
    let haps = haplotypes(&dh, &all).unwrap();
    for ind in 0..dh.n_individuals() {
        for col in 0..all.n_selected() {
            assert_eq!(dh_dosage[(ind, col)], haps[(2 * ind, col)] + haps[(2 * ind + 1, col)]);
        }
    }
}

#[test]
fn test_pedigree_workflow() {
    let loci = [30];
    let engine = CrossingBuilder::new()
        .genetic_maps(vec![GeneticMap::uniform(loci[0], 1.0).unwrap()])
        .recombination_ratio(2.0)
        .build()
        .unwrap();
    let founders = inbred_lines(&loci);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(77);

    // 1-based pedigree, 0 = unknown parent:
    //   1, 2: founder draws
    //   3: 1 x 2
    //   4: 3 x 3 (self)
    let pedigree = interface::pedigree_from_one_based(&[0, 0, 1, 3], &[0, 0, 2, 3]).unwrap();
    let geno = engine.cross_pedigree(&founders, &pedigree, &mut rng).unwrap();
    assert_eq!(geno.n_individuals(), 4);
    assert!(geno.chromosome(0).as_slice().iter().all(|&a| a <= 1));

    // A pedigree referencing a later entry is rejected up front.
    assert!(interface::pedigree_from_one_based(&[0, 3], &[0, 0]).is_err());
}

#[test]
fn test_subset_selection_with_one_based_locations() {
    let loci = [5, 4];
    let store = GenotypeStore::from_fn(&loci, 2, 3, |chr, locus, h, _| {
        ((chr * 10 + locus + h) % 2) as u8
    })
    .unwrap();
    let selection = interface::loci_selection(vec![2, 1], &[1, 5, 4]).unwrap();
    let haps = haplotypes(&store, &selection).unwrap();
    assert_eq!(haps.shape(), (6, 3));
    for ind in 0..3 {
        assert_eq!(haps[(2 * ind, 0)], store.chromosome(0).allele(0, 0, ind));
        assert_eq!(haps[(2 * ind + 1, 1)], store.chromosome(0).allele(4, 1, ind));
        assert_eq!(haps[(2 * ind, 2)], store.chromosome(1).allele(3, 0, ind));
    }
}
