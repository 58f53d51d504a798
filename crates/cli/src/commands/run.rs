use anyhow::{Context, Result};
use breedsim_sim::crossing::{CrossingBuilder, CrossingEngine};
use breedsim_sim::genome::{random_founders, GenotypeStore};
use breedsim_sim::interface;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::args::RunArgs;
use crate::defaults;
use crate::printing::{print_engine, print_scenario, print_summary};
use crate::scenario::{Scenario, Step};
use crate::summary::PopulationSummary;

pub fn run_scenario(args: &RunArgs, threads: Option<usize>) -> Result<()> {
    println!("🧬 Breedsim - Running Scenario");
    println!("============================================\n");

    let mut scenario = Scenario::load(&args.scenario)?;
    if let Some(seed) = args.seed {
        scenario.seed = seed;
    }
    if threads.is_some() {
        scenario.crossing.threads = threads;
    }
    print_scenario(&scenario);

    let engine = CrossingBuilder::from_config(&scenario.crossing)
        .genetic_maps(scenario.genetic_maps()?)
        .build()
        .context("Failed to build crossing engine")?;
    print_engine(&engine);

    let summaries = execute(&scenario, &engine)?;

    if let Some(output) = &args.output {
        let file = File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summaries)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("\n✓ Summaries written to {}", output.display());
    }

    println!("\n✓ Scenario complete!");
    Ok(())
}

pub fn validate_scenario(path: &Path) -> Result<()> {
    let scenario = Scenario::load(path)?;
    scenario.genetic_maps()?;
    println!(
        "✓ {} is valid ({} chromosomes, {} steps)",
        path.display(),
        scenario.chromosomes.len(),
        scenario.steps.len()
    );
    Ok(())
}

/// Run every step in order, returning one summary per population.
fn execute(scenario: &Scenario, engine: &CrossingEngine) -> Result<Vec<PopulationSummary>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(scenario.seed);
    let founders = random_founders(
        &scenario.loci_per_chromosome(),
        scenario.founders.n_individuals,
        scenario.founders.allele_frequency,
        &mut rng,
    )
    .context("Failed to create founders")?;

    println!("\n📊 Populations");
    let mut summaries = Vec::with_capacity(scenario.steps.len() + 1);
    let summary = PopulationSummary::compute(defaults::FOUNDERS, "founders", &founders)?;
    print_summary(&summary);
    summaries.push(summary);

    let mut populations: HashMap<String, GenotypeStore> = HashMap::new();
    populations.insert(defaults::FOUNDERS.to_string(), founders);

    for (i, step) in scenario.steps.iter().enumerate() {
        let start = Instant::now();
        let source = populations
            .get(step.source())
            .with_context(|| format!("Unknown population '{}'", step.source()))?;
        let store = run_step(step, source, engine, &mut rng)
            .with_context(|| format!("Step {} ({}) failed", i + 1, step.name()))?;
        info!(
            step = step.name(),
            kind = step.kind(),
            n_individuals = store.n_individuals(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "step complete"
        );

        let summary = PopulationSummary::compute(step.name(), step.kind(), &store)?;
        print_summary(&summary);
        summaries.push(summary);
        populations.insert(step.name().to_string(), store);
    }

    Ok(summaries)
}

fn run_step<R: Rng + ?Sized>(
    step: &Step,
    source: &GenotypeStore,
    engine: &CrossingEngine,
    rng: &mut R,
) -> Result<GenotypeStore> {
    let store = match step {
        Step::RandomCross { n_offspring, .. } => {
            let (mothers, fathers) = random_pairs(source.n_individuals(), *n_offspring, rng)?;
            debug!(n_pairs = mothers.len(), "sampled random parents");
            engine.cross(source, &mothers, source, &fathers, rng)?
        }
        Step::DoubledHaploid { n_dh, sex, .. } => {
            engine.doubled_haploids(source, *n_dh, *sex, rng)?
        }
        Step::Pedigree {
            mothers, fathers, ..
        } => {
            let pedigree = interface::pedigree_from_one_based(mothers, fathers)?;
            engine.cross_pedigree(source, &pedigree, rng)?
        }
    };
    Ok(store)
}

/// Draw `n` mother/father pairs uniformly, avoiding selfing unless the
/// population has a single individual.
fn random_pairs<R: Rng + ?Sized>(
    n_parents: usize,
    n: usize,
    rng: &mut R,
) -> Result<(Vec<usize>, Vec<usize>)> {
    anyhow::ensure!(n_parents > 0, "Cannot cross an empty population");
    let mut mothers = Vec::with_capacity(n);
    let mut fathers = Vec::with_capacity(n);
    for _ in 0..n {
        let mother = rng.random_range(0..n_parents);
        let father = if n_parents == 1 {
            mother
        } else {
            let f = rng.random_range(0..n_parents - 1);
            if f >= mother {
                f + 1
            } else {
                f
            }
        };
        mothers.push(mother);
        fathers.push(father);
    }
    Ok((mothers, fathers))
}
