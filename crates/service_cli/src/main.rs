//! Underwrite CLI
//!
//! Operational entry point for the deal underwriting library.

use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Underwrite - real-estate deal analysis
#[derive(Parser, Debug)]
#[command(name = "underwrite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "UNDERWRITE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Year used to age buildings (defaults to the current year)
    #[arg(long, global = true)]
    valuation_year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute economics, score and risk buffers for a deal
    Analyse {
        /// Path to deal file (TOML/JSON)
        #[arg(short, long)]
        deal: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Find the highest purchase price that meets every target
    Optimise {
        /// Path to deal file (TOML/JSON)
        #[arg(short, long)]
        deal: PathBuf,

        /// Search strategy (linear, bisection)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the resolved configuration
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let log_level = match (&cli.log_level, cli.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some("debug".to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: cli.config.clone(),
            log_level,
            valuation_year: cli.valuation_year,
            strategy: match &cli.command {
                Commands::Optimise { strategy, .. } => strategy.clone(),
                _ => None,
            },
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!(version = env!("CARGO_PKG_VERSION"), "underwrite starting");
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Analyse { deal, pretty } => commands::analyse::run(&deal, &config, pretty)?,
        Commands::Optimise { deal, pretty, .. } => commands::optimise::run(&deal, &config, pretty)?,
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}
