mod args;
mod commands;
pub mod defaults;
mod printing;
mod scenario;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{InitArgs, RunArgs};
use commands::{init, run};

/// Breedsim: meiosis and crossing for breeding-program simulation
///
/// Runs crossing scenarios (random crosses, doubled haploids and pedigrees)
/// from a JSON description and reports population summaries.
#[derive(Parser, Debug)]
#[command(name = "breedsim")]
#[command(author, version, long_about = None)]
#[command(about = "Simulates crosses, doubled haploids and pedigrees")]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// Overrides the scenario's setting. If neither is set, defaults to the
    /// number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a new scenario file with a default breeding program.
    ///
    /// Edit the file to change the genome, founders or steps, then execute
    /// it with `run`.
    Init(Box<InitArgs>),

    /// Run a scenario.
    ///
    /// Executes every step in order and prints a summary of each population.
    Run(RunArgs),

    /// Validate a scenario file without running it.
    Validate {
        /// Scenario file to check
        #[arg(short, long, default_value = defaults::SCENARIO_FILE)]
        scenario: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("breedsim=debug,breedsim_sim=debug,info")
    } else {
        EnvFilter::new("breedsim=warn,breedsim_sim=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Init(args) => {
            init::init_scenario(&args)?;
        }
        Commands::Run(args) => {
            run::run_scenario(&args, cli.threads)?;
        }
        Commands::Validate { scenario } => {
            run::validate_scenario(&scenario)?;
        }
    }

    Ok(())
}
