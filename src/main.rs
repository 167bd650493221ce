//! Species Factory - Entry Point
//!
//! Builds the requested species, prints each one with its attributes,
//! then waits for a key press before exiting.

use species_factory::core::config::DisplayConfig;
use species_factory::core::error::Result;
use species_factory::entity::SpeciesRegistry;
use species_factory::render::{write_listing, OutputFormat};

use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Print species and the attributes their factories create
#[derive(Parser, Debug)]
#[command(name = "species-factory")]
#[command(about = "Print each species and the attributes its factory creates")]
struct Args {
    /// Species to build, in order
    #[arg(long, value_delimiter = ',', default_values_t = vec!["Immortal".to_string(), "Mortal".to_string()])]
    species: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TOML display configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exit without waiting for input
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the listing on stdout stays exact
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("species_factory=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };

    let registry = SpeciesRegistry::builtin();
    let species = registry.build_all(&args.species)?;
    tracing::info!("Built {} species", species.len());

    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), &species, args.format, &config)?;

    if config.pause_on_exit && !args.no_pause {
        wait_for_input()?;
    }

    Ok(())
}

/// Block until one line of input arrives or stdin closes
fn wait_for_input() -> Result<()> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
