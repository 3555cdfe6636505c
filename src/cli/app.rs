//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::logging::setup_tracing;
use super::output::{Output, OutputFormat, Palette};
use super::shop::Shop;
use super::{config_cmd, order, stock};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "In-memory store inventory and ordering")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file with the catalog to load
    #[arg(long, short = 'c', global = true, env = "STOREFRONT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive store menu (default)
    Shop {
        /// Commit orders all-or-nothing instead of line by line
        #[arg(long)]
        atomic: bool,
    },

    /// List active products
    List,

    /// Show the total stock in the store
    Total,

    /// Place an order, e.g. `storefront order 1:2 3:1`
    Order {
        /// Selections as <index>:<quantity>, index from `storefront list`
        #[arg(required = true)]
        selections: Vec<String>,

        /// Commit the order all-or-nothing instead of line by line
        #[arg(long)]
        atomic: bool,
    },

    /// Show the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.display.default_format);
    let palette = Palette::for_stdout(config.display.color && !cli.no_color);
    let output = Output::new(format, palette);

    output.verbose(&format!(
        "Loaded configuration from {}",
        config
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string())
    ));

    let mut catalog = config.build_catalog()?;
    output.verbose(&format!("Catalog seeded with {} items", catalog.len()));

    match cli.command.unwrap_or(Commands::Shop { atomic: false }) {
        Commands::Shop { atomic } => {
            let stdin = io::stdin();
            let mut shop = Shop::new(catalog, stdin.lock(), io::stdout(), palette).atomic(atomic);
            shop.run()?
        }
        Commands::List => stock::list(&output, &catalog)?,
        Commands::Total => stock::total(&output, &catalog)?,
        Commands::Order { selections, atomic } => {
            let msg = format!("{} selection(s), atomic={}", selections.len(), atomic);
            output.verbose_ctx("order", &msg);
            order::run(&output, &mut catalog, &selections, atomic)?
        }
        Commands::Config => config_cmd::show(&output, &config)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
