use breedsim_sim::crossing::CrossingEngine;

use crate::scenario::Scenario;
use crate::summary::PopulationSummary;

pub fn print_scenario(scenario: &Scenario) {
    println!("\n📋 Scenario");
    println!("  • Random Seed: {} [--seed]", scenario.seed);
    println!(
        "  • Founders: {} (allele frequency {:.2})",
        scenario.founders.n_individuals, scenario.founders.allele_frequency
    );

    println!("\n🧬 Genome");
    println!("  • Chromosomes: {}", scenario.chromosomes.len());
    for (i, chr) in scenario.chromosomes.iter().enumerate() {
        println!("    - Chr {}: {} loci, {:.3} M", i + 1, chr.n_loci, chr.length);
    }
    println!("  • Ploidy: Diploid (2 homologs)");

    println!("\n🔀 Crossing");
    println!(
        "  • Recombination Ratio (female:male): {}",
        scenario.crossing.recombination_ratio.value()
    );
    match scenario.crossing.threads {
        Some(threads) => println!("  • Threads: {threads} [--threads]"),
        None => println!("  • Threads: all CPUs [--threads]"),
    }

    println!("\n🪜 Steps");
    for (i, step) in scenario.steps.iter().enumerate() {
        println!(
            "  {}. {} <- {} ({})",
            i + 1,
            step.name(),
            step.source(),
            step.kind()
        );
    }
}

pub fn print_engine(engine: &CrossingEngine) {
    println!("  • Engine threads: {}", engine.threads());
}

pub fn print_summary(summary: &PopulationSummary) {
    println!(
        "  ✓ {:<12} {:>7} individuals  p = {:.3}  het = {:.3}  homozygous = {}",
        summary.name,
        summary.n_individuals,
        summary.allele_frequency,
        summary.heterozygosity,
        summary.n_homozygous
    );
}
