use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tram_network::commands;
use tram_network::config::NetworkConfig;
use tram_network::dialogue::run_dialogue;

#[derive(Parser, Debug)]
#[command(
    name = "tram-network",
    version,
    about = "Compile a tram schedule into a network snapshot and answer questions about it"
)]
struct Args {
    /// Verbose output (show debug messages)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild the network snapshot from the raw sources
    Init {
        /// Stop positions (JSON)
        #[arg(long)]
        stops: Option<PathBuf>,

        /// Line schedule (text)
        #[arg(long)]
        lines: Option<PathBuf>,

        /// Snapshot to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load the snapshot and answer questions from stdin (default)
    Dialogue {
        /// Snapshot to read
        #[arg(short, long)]
        network: Option<PathBuf>,

        /// Command that ends the dialogue
        #[arg(long)]
        exit_keyword: Option<String>,
    },

    /// Report consistency problems in a snapshot
    Check {
        /// Snapshot to read
        #[arg(short, long)]
        network: Option<PathBuf>,

        /// Flag stop pairs further apart than this (km)
        #[arg(long)]
        max_distance_km: Option<f64>,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so answers on stdout stay clean
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let config = NetworkConfig::default();
    let command = args.command.unwrap_or(Command::Dialogue {
        network: None,
        exit_keyword: None,
    });

    match command {
        Command::Init {
            stops,
            lines,
            output,
        } => {
            let mut config = config;
            if let Some(path) = stops {
                config = config.with_stops_path(path);
            }
            if let Some(path) = lines {
                config = config.with_lines_path(path);
            }
            if let Some(path) = output {
                config = config.with_network_path(path);
            }
            init(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Dialogue {
            network,
            exit_keyword,
        } => {
            let mut config = config;
            if let Some(path) = network {
                config = config.with_network_path(path);
            }
            if let Some(keyword) = exit_keyword {
                config = config.with_exit_keyword(keyword);
            }
            dialogue(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            network,
            max_distance_km,
        } => {
            let mut config = config;
            if let Some(path) = network {
                config = config.with_network_path(path);
            }
            if let Some(km) = max_distance_km {
                config = config.with_max_distance_km(km);
            }
            check(&config)
        }
    }
}

fn init(config: &NetworkConfig) -> Result<()> {
    commands::init(config).context("failed to build network snapshot")?;
    Ok(())
}

fn dialogue(config: &NetworkConfig) -> Result<()> {
    let engine = commands::load_engine(config).with_context(|| {
        format!(
            "failed to load {} (run `tram-network init` first)",
            config.network_path.display()
        )
    })?;

    let summary = run_dialogue(
        &engine,
        io::stdin().lock(),
        io::stdout().lock(),
        &config.exit_keyword,
    )
    .context("dialogue I/O failed")?;
    info!(
        answered = summary.answered,
        failed = summary.failed,
        "dialogue ended"
    );
    Ok(())
}

fn check(config: &NetworkConfig) -> Result<ExitCode> {
    let report = commands::check(config).context("failed to load network")?;
    Ok(if report.is_consistent() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
