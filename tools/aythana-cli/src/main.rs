//! Aythana CLI - terminal storefront for the Aythana hair-care catalog.
//!
//! Commands:
//! - `aythana catalog` - List products
//! - `aythana add` - Add products to the cart
//! - `aythana count` - Show the cart item count
//! - `aythana summary` - Print the order summary
//! - `aythana checkout` - Hand the order off to WhatsApp or email
//! - `aythana shop` - Interactive shopping session
//! - `aythana config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, CheckoutArgs, ConfigArgs};

/// Aythana - order hair-care products over WhatsApp or email
#[derive(Parser)]
#[command(name = "aythana")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Catalog,

    /// Add products to the cart
    Add(AddArgs),

    /// Show how many items are in the cart
    Count,

    /// Print the order summary
    Summary,

    /// Send the order via WhatsApp or email
    Checkout(CheckoutArgs),

    /// Browse and order interactively
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog => commands::catalog::run(&ctx).await,
        Commands::Add(args) => commands::add::run(args, &ctx).await,
        Commands::Count => commands::count::run(&ctx).await,
        Commands::Summary => commands::summary::run(&ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Diagnostics go to stderr, filtered by `AYTHANA_LOG` (then `RUST_LOG`).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("AYTHANA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
