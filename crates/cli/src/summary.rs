//! Per-population summary statistics.

use anyhow::Result;
use breedsim_sim::access::{dominance_indicator, dosage, LociSelection};
use breedsim_sim::genome::GenotypeStore;
use serde::Serialize;

/// Summary of one population created by a scenario step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationSummary {
    pub name: String,
    pub kind: String,
    pub n_individuals: usize,
    pub n_loci: usize,
    /// Mean frequency of allele 1 across all loci
    pub allele_frequency: f64,
    /// Fraction of heterozygous genotypes
    pub heterozygosity: f64,
    /// Individuals homozygous at every locus
    pub n_homozygous: usize,
}

impl PopulationSummary {
    pub fn compute(name: &str, kind: &str, store: &GenotypeStore) -> Result<Self> {
        let all = LociSelection::all(store);
        let dos = dosage(store, &all)?;
        let dom = dominance_indicator(&dos);

        let n_genotypes = dos.len();
        let (allele_frequency, heterozygosity) = if n_genotypes == 0 {
            (0.0, 0.0)
        } else {
            let alleles: usize = dos.iter().map(|&d| d as usize).sum();
            let hets: usize = dom.iter().map(|&d| d as usize).sum();
            (
                alleles as f64 / (store.ploidy() * n_genotypes) as f64,
                hets as f64 / n_genotypes as f64,
            )
        };
        let n_homozygous = (0..store.n_individuals())
            .filter(|&ind| store.is_homozygous(ind))
            .count();

        Ok(Self {
            name: name.to_string(),
            kind: kind.to_string(),
            n_individuals: store.n_individuals(),
            n_loci: store.total_loci(),
            allele_frequency,
            heterozygosity,
            n_homozygous,
        })
    }
}
