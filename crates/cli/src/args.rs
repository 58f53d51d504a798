use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output scenario path
    #[arg(short, long, default_value = defaults::SCENARIO_FILE)]
    pub output: PathBuf,

    /// Random seed stored in the scenario
    #[arg(long, default_value_t = defaults::SEED)]
    pub seed: u64,

    /// Number of founder individuals
    #[arg(short = 'n', long, default_value_t = defaults::N_FOUNDERS)]
    pub founders: usize,

    /// Allele frequency used to draw founder genotypes
    #[arg(long, default_value_t = defaults::ALLELE_FREQUENCY)]
    pub allele_frequency: f64,

    /// Number of chromosomes
    #[arg(short, long, default_value_t = defaults::N_CHROMOSOMES)]
    pub chromosomes: usize,

    /// Loci per chromosome
    #[arg(short, long, default_value_t = defaults::LOCI_PER_CHR)]
    pub loci_per_chr: usize,

    /// Genetic length of each chromosome in Morgans
    #[arg(long, default_value_t = defaults::CHROMOSOME_LENGTH)]
    pub chromosome_length: f64,

    /// Female:male recombination ratio
    #[arg(long, default_value_t = defaults::RECOMBINATION_RATIO)]
    pub recombination_ratio: f64,

    /// Overwrite an existing scenario file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scenario file to execute
    #[arg(short, long, default_value = defaults::SCENARIO_FILE)]
    pub scenario: PathBuf,

    /// Override random seed (default: use the scenario's seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write per-step population summaries as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
