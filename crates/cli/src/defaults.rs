//! Shared default values for scenario configuration.
//! These values are used by the `init` command (via clap) and by serde
//! when a scenario file omits optional fields.

pub const SCENARIO_FILE: &str = "scenario.json";

pub const SEED: u64 = 42;

pub const N_FOUNDERS: usize = 20;
pub const ALLELE_FREQUENCY: f64 = 0.5;

pub const N_CHROMOSOMES: usize = 3;
pub const LOCI_PER_CHR: usize = 1000;
/// Chromosome length in Morgans.
pub const CHROMOSOME_LENGTH: f64 = 1.0;

pub const RECOMBINATION_RATIO: f64 = 1.0;

pub const N_OFFSPRING: usize = 100;
pub const N_DH: usize = 5;

/// Name of the founder population in scenario steps.
pub const FOUNDERS: &str = "founders";
