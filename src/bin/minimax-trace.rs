//! Command-line front end.
//!
//! ```text
//! minimax-trace run "(A (B 3 5) (C 6 9))" --stats
//! minimax-trace random --seed 7 --leaves 8
//! minimax-trace explain "(A 1 2)" --step 2
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minimax_trace::explain::{ProviderError, TextGenerator};
use minimax_trace::generate::random_tree_text;
use minimax_trace::{
    run_with, ConfigError, ExplanationGateway, FormatError, TreeRng, Visualization,
    VisualizerConfig,
};

/// Step through minimax with alpha-beta pruning
#[derive(Parser, Debug)]
#[command(name = "minimax-trace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum nesting depth accepted by the parser (0 = unlimited)
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search a tree and print its step log
    Run {
        /// Tree in bracketed form, e.g. "(A (B 3 5) (C 6 9))"
        expr: String,

        /// Print the tree and steps as JSON
        #[arg(long)]
        json: bool,

        /// Print visit and pruning counts
        #[arg(long)]
        stats: bool,
    },

    /// Print a random complete binary tree
    Random {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of leaves
        #[arg(long)]
        leaves: Option<usize>,

        /// Smallest leaf value
        #[arg(long)]
        min: Option<i64>,

        /// Largest leaf value
        #[arg(long)]
        max: Option<i64>,
    },

    /// Explain one step of a run
    Explain {
        /// Tree in bracketed form
        expr: String,

        /// Step index (0-based)
        #[arg(long)]
        step: usize,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("step {index} out of range, run has {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    #[error("--leaves must be at least 1")]
    NoLeaves,
}

/// Stand-in provider: answers with the prompt it would have sent.
struct PromptEcho;

impl TextGenerator for PromptEcho {
    fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        Ok(prompt.to_string())
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<VisualizerConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => VisualizerConfig::from_file(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(depth) = cli.max_depth {
        config.parse.max_depth = depth;
    }
    Ok(config)
}

fn print_steps(vis: &Visualization) {
    for (index, step) in vis.steps.iter().enumerate() {
        let name = &vis.tree.get(step.node_id).name;
        println!("{index:>4}  {:<6} {:<6} {}", step.kind, name, step.message);
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let mut config = load_config(cli)?;
    debug!(?config, "configuration loaded");

    match &cli.command {
        Commands::Run { expr, json, stats } => {
            let vis = run_with(expr, &config)?;
            if *json {
                println!("{}", vis.to_json()?);
            } else {
                print_steps(&vis);
            }
            if *stats {
                println!("{}", vis.stats());
            }
        }
        Commands::Random {
            seed,
            leaves,
            min,
            max,
        } => {
            let generator = &mut config.generator;
            if let Some(leaves) = leaves {
                generator.leaves = *leaves;
            }
            if let Some(min) = min {
                generator.min = *min;
            }
            if let Some(max) = max {
                generator.max = *max;
            }

            let seed = seed.unwrap_or_else(rand::random);
            debug!(seed, "generating tree");
            let text = random_tree_text(&mut TreeRng::new(seed), generator)
                .ok_or(CliError::NoLeaves)?;
            println!("{text}");
        }
        Commands::Explain { expr, step } => {
            let vis = run_with(expr, &config)?;
            let selected = vis.steps.get(*step).ok_or(CliError::StepOutOfRange {
                index: *step,
                len: vis.steps.len(),
            })?;

            let gateway = ExplanationGateway::from_env(&config.explain, |_, _| PromptEcho);
            println!("{}", gateway.explain(expr, selected));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
