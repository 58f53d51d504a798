use anyhow::{bail, Context, Result};
use breedsim_sim::crossing::CrossingConfig;
use breedsim_sim::meiosis::RecombinationRatio;
use tracing::info;

use crate::args::InitArgs;
use crate::printing::print_scenario;
use crate::scenario::{ChromosomeConfig, FounderConfig, Scenario};

pub fn init_scenario(args: &InitArgs) -> Result<()> {
    println!("🧬 Breedsim - Crossing Scenario Setup");
    println!("============================================\n");

    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let scenario = build_scenario(args)?;
    scenario.validate()?;
    print_scenario(&scenario);

    scenario.save(&args.output)?;
    info!(path = %args.output.display(), "scenario written");
    println!("\n✓ Scenario written to {}", args.output.display());
    println!("  Run it with: breedsim run --scenario {}", args.output.display());
    Ok(())
}

fn build_scenario(args: &InitArgs) -> Result<Scenario> {
    let ratio = RecombinationRatio::new(args.recombination_ratio)
        .context("Invalid --recombination-ratio")?;
    let chromosomes = (0..args.chromosomes)
        .map(|_| ChromosomeConfig {
            n_loci: args.loci_per_chr,
            length: args.chromosome_length,
        })
        .collect();

    let scenario = Scenario::default_program(
        args.seed,
        CrossingConfig::new(ratio, None),
        FounderConfig {
            n_individuals: args.founders,
            allele_frequency: args.allele_frequency,
        },
        chromosomes,
    );
    // Maps are derived from the layout; fail here rather than at `run`.
    scenario.genetic_maps()?;
    Ok(scenario)
}
