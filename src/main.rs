mod booking;
mod commands;
mod config;
mod fixtures;
mod models;
mod web;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Salon website - landing page and online booking.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the website
    Serve {
        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,

        /// Listen address, overrides `server.addr` (e.g. "0.0.0.0:3000")
        #[arg(short = 'a', long)]
        addr: Option<String>,
    },

    /// Show stylists and services
    Catalog {
        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,
    },

    /// Show the time-slot availability pattern
    Slots,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve { config, addr } => {
            let cfg = config::load_config(config)?;
            let addr = addr.clone().unwrap_or_else(|| cfg.server.addr.clone());
            web::serve(cfg, &addr).await?;
        }
        Command::Catalog { config } => {
            commands::run_catalog(config)?;
        }
        Command::Slots => {
            commands::run_slots()?;
        }
    }

    Ok(())
}
