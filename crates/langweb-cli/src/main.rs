//! The langweb command line.

mod pipeline;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use langweb_core::config::LangwebConfig;
use langweb_core::tracing::init_tracing;

#[derive(Parser)]
#[command(name = "langweb", version, about = "CSV survey data to network and Sankey pages")]
struct Cli {
    /// Path to langweb.toml. Defaults to ./langweb.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the survey CSVs and write the merged exchange file
    Convert,
    /// Build nodes_links.json from the exchange file
    Graph,
    /// Render the network diagram page
    Network,
    /// Render the Sankey diagram page
    Sankey,
    /// Run all four stages in order
    Run,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = LangwebConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Command::Convert => pipeline::convert(&config)?,
        Command::Graph => pipeline::graph(&config)?,
        Command::Network => pipeline::network(&config)?,
        Command::Sankey => pipeline::sankey(&config)?,
        Command::Run => pipeline::run(&config)?,
    }
    Ok(())
}
