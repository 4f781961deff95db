//! Twister CLI - Seeded, Replayable Random Draws
//!
//! Operational entry point for the twister generation engine.
//!
//! # Commands
//!
//! - `twister int --seed 42 --min 0 --max 1000` - Uniform integers
//! - `twister sphere --seed 7 --inside` - Points in a ball
//! - `twister state --seed 42 --count 100` - Stream-state token for replay
//! - `twister guid` - Fresh GUID from OS entropy
//!
//! # Replay
//!
//! Every seeded command logs its final `seed:count` token. Passing it
//! back with `--resume` continues the exact same stream.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate drives the engine and
//! sampling layers; values go to stdout, logs go to stderr.

use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::StreamSource;

/// Twister random engine CLI
#[derive(Parser)]
#[command(name = "twister")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "twister.toml")]
    config: String,

    /// Seed for a fresh stream (overrides the configuration file)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Resume the stream at a `seed:count` token
    #[arg(short, long, global = true, conflicts_with = "seed", allow_hyphen_values = true)]
    resume: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw uniform integers in [min, max]
    Int {
        /// Lower bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: i32,

        /// Upper bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: i32,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Draw-units to skip first
        #[arg(long, default_value = "0")]
        skip: u64,
    },

    /// Draw uniform floats in [min, max]
    Float {
        /// Lower bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        /// Upper bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Draw-units to skip first
        #[arg(long, default_value = "0")]
        skip: u64,
    },

    /// Draw normally distributed values
    Gaussian {
        /// Mean
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation
        #[arg(long, default_value = "1")]
        stddev: f64,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Roll dice and print the total
    Dice {
        /// Number of dice
        #[arg(short = 'n', long, default_value = "1")]
        count: i32,

        /// Faces per die
        #[arg(short = 'd', long, default_value = "6")]
        sides: i32,
    },

    /// Pick an index in proportion to its weight
    Weighted {
        /// Weights; non-positive or non-finite entries are never chosen
        #[arg(required = true, allow_negative_numbers = true)]
        weights: Vec<f64>,
    },

    /// Sample points on or in a sphere
    Sphere {
        /// Sphere radius
        #[arg(long, default_value = "1")]
        radius: f64,

        /// Sample the ball volume instead of the surface
        #[arg(long)]
        inside: bool,

        /// Number of points
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Sample uniformly distributed rotations
    Quat {
        /// Number of quaternions
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Shuffle the given items
    Shuffle {
        /// Items to shuffle
        items: Vec<String>,
    },

    /// Print the stream-state token at a position
    State {
        /// Absolute draw count to jump to
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// Print a fresh entropy seed
    Seed,

    /// Print a fresh GUID
    Guid,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    // Initialise tracing; RUST_LOG directives extend the configured level
    let default_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::from(config.log_level)
    };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(path = %cli.config, ?config, "configuration resolved");

    let source = StreamSource {
        seed: cli.seed,
        resume: cli.resume.as_deref(),
    };

    match cli.command {
        Commands::Int {
            min,
            max,
            count,
            skip,
        } => commands::draw::run_int(config::engine_for(source, &config)?, min, max, count, skip),
        Commands::Float {
            min,
            max,
            count,
            skip,
        } => commands::draw::run_float(config::engine_for(source, &config)?, min, max, count, skip),
        Commands::Gaussian {
            mean,
            stddev,
            count,
        } => commands::draw::run_gaussian(config::engine_for(source, &config)?, mean, stddev, count),
        Commands::Dice { count, sides } => {
            commands::draw::run_dice(config::engine_for(source, &config)?, count, sides)
        }
        Commands::Weighted { weights } => {
            commands::draw::run_weighted(config::engine_for(source, &config)?, &weights)
        }
        Commands::Sphere {
            radius,
            inside,
            count,
            format,
        } => commands::sample::run_sphere(
            config::engine_for(source, &config)?,
            radius,
            inside,
            count,
            &format,
        ),
        Commands::Quat { count, format } => {
            commands::sample::run_quat(config::engine_for(source, &config)?, count, &format)
        }
        Commands::Shuffle { items } => {
            commands::sample::run_shuffle(config::engine_for(source, &config)?, items)
        }
        Commands::State { count } => {
            commands::stream::run(config::engine_for(source, &config)?, count)
        }
        Commands::Seed => commands::entropy::run_seed(),
        Commands::Guid => commands::entropy::run_guid(),
    }
}
