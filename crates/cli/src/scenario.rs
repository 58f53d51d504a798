//! Scenario files: genome layout, founders and an ordered list of steps.

use anyhow::{bail, ensure, Context, Result};
use breedsim_sim::crossing::CrossingConfig;
use breedsim_sim::genome::GeneticMap;
use breedsim_sim::Sex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::defaults;

/// A complete breeding scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub seed: u64,
    #[serde(default)]
    pub crossing: CrossingConfig,
    pub founders: FounderConfig,
    pub chromosomes: Vec<ChromosomeConfig>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderConfig {
    pub n_individuals: usize,
    #[serde(default = "default_allele_frequency")]
    pub allele_frequency: f64,
}

/// One chromosome with evenly spaced loci.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromosomeConfig {
    pub n_loci: usize,
    /// Genetic length in Morgans
    pub length: f64,
}

/// A step creating a new named population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Random mating within `source`; selfing is avoided when possible.
    RandomCross {
        name: String,
        source: String,
        n_offspring: usize,
    },
    /// `n_dh` doubled-haploid lines per individual of `source`.
    DoubledHaploid {
        name: String,
        source: String,
        n_dh: usize,
        #[serde(default)]
        sex: Sex,
    },
    /// Pedigree with 1-based parent references; 0 draws a random founder.
    Pedigree {
        name: String,
        #[serde(default = "default_founders")]
        founders: String,
        mothers: Vec<usize>,
        fathers: Vec<usize>,
    },
}

impl Step {
    pub fn name(&self) -> &str {
        match self {
            Step::RandomCross { name, .. }
            | Step::DoubledHaploid { name, .. }
            | Step::Pedigree { name, .. } => name,
        }
    }

    /// Population this step reads from.
    pub fn source(&self) -> &str {
        match self {
            Step::RandomCross { source, .. } | Step::DoubledHaploid { source, .. } => source,
            Step::Pedigree { founders, .. } => founders,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Step::RandomCross { .. } => "random cross",
            Step::DoubledHaploid { .. } => "doubled haploid",
            Step::Pedigree { .. } => "pedigree",
        }
    }
}

fn default_allele_frequency() -> f64 {
    defaults::ALLELE_FREQUENCY
}

fn default_founders() -> String {
    defaults::FOUNDERS.to_string()
}

impl Scenario {
    /// Read and validate a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Write the scenario as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scenario")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write scenario {}", path.display()))
    }

    /// Check the layout and that every step reads an existing population.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.chromosomes.is_empty(), "Scenario has no chromosomes");
        ensure!(
            (0.0..=1.0).contains(&self.founders.allele_frequency),
            "Founder allele frequency {} is not in [0, 1]",
            self.founders.allele_frequency
        );

        let mut names: HashSet<&str> = HashSet::from([defaults::FOUNDERS]);
        for (i, step) in self.steps.iter().enumerate() {
            if !names.contains(step.source()) {
                bail!(
                    "Step {} ({}) reads unknown population '{}'",
                    i + 1,
                    step.name(),
                    step.source()
                );
            }
            if !names.insert(step.name()) {
                bail!("Step {} reuses population name '{}'", i + 1, step.name());
            }
            match step {
                Step::RandomCross { n_offspring: 0, .. } => {
                    bail!("Step {} ({}) has n_offspring = 0", i + 1, step.name())
                }
                Step::DoubledHaploid { n_dh: 0, .. } => {
                    bail!("Step {} ({}) has n_dh = 0", i + 1, step.name())
                }
                Step::Pedigree {
                    mothers, fathers, ..
                } if mothers.len() != fathers.len() => bail!(
                    "Step {} ({}) has {} mothers but {} fathers",
                    i + 1,
                    step.name(),
                    mothers.len(),
                    fathers.len()
                ),
                _ => {}
            }
        }
        Ok(())
    }

    /// Evenly spaced genetic maps for every chromosome.
    pub fn genetic_maps(&self) -> Result<Vec<GeneticMap>> {
        self.chromosomes
            .iter()
            .enumerate()
            .map(|(i, chr)| {
                GeneticMap::uniform(chr.n_loci, chr.length)
                    .with_context(|| format!("Invalid chromosome {}", i + 1))
            })
            .collect()
    }

    pub fn loci_per_chromosome(&self) -> Vec<usize> {
        self.chromosomes.iter().map(|c| c.n_loci).collect()
    }

    /// The program written by `init`: F1 from the founders, DH lines from
    /// the F1, and a small three-generation pedigree.
    pub fn default_program(
        seed: u64,
        crossing: CrossingConfig,
        founders: FounderConfig,
        chromosomes: Vec<ChromosomeConfig>,
    ) -> Self {
        let steps = vec![
            Step::RandomCross {
                name: "f1".into(),
                source: defaults::FOUNDERS.into(),
                n_offspring: defaults::N_OFFSPRING,
            },
            Step::DoubledHaploid {
                name: "dh".into(),
                source: "f1".into(),
                n_dh: defaults::N_DH,
                sex: Sex::Female,
            },
            Step::Pedigree {
                name: "family".into(),
                founders: defaults::FOUNDERS.into(),
                mothers: vec![0, 0, 0, 0, 1, 3, 5],
                fathers: vec![0, 0, 0, 0, 2, 4, 6],
            },
        ];
        Self {
            seed,
            crossing,
            founders,
            chromosomes,
            steps,
        }
    }
}
