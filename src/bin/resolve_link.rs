//! CLI for resolving offer links from the terminal.
//!
//! Resolves a link exactly as the app would and prints the side effect the
//! app would perform.
//!
//! # Usage
//!
//! ```bash
//! # Resolve against a catalog file
//! cargo run --bin resolve-link -- resolve "app://open/giftcard?merchant=Amazon" --catalog catalog.json
//!
//! # Open external links in the embedded browser
//! cargo run --bin resolve-link -- resolve "https://example.com/promo" --in-app
//!
//! # Machine-readable output
//! cargo run --bin resolve-link -- resolve "app://open/shop" --json
//!
//! # List the route patterns
//! cargo run --bin resolve-link -- routes
//! ```
//!
//! # Environment Variables
//!
//! - `APP_DEEPLINK_PREFIX` (optional): default for `--prefix`
//! - `GIFT_CARD_CATALOG_PATH` (optional): default for `--catalog`

use offer_link_resolver::application::services::{LinkResolver, OfferDispatcher};
use offer_link_resolver::config::DEFAULT_DEEPLINK_PREFIX;
use offer_link_resolver::domain::entities::{GiftCardConfig, InboundLink, Resolution, ResolutionOutcome};
use offer_link_resolver::domain::repositories::GiftCardCatalog;
use offer_link_resolver::infrastructure::catalog::InMemoryCatalog;
use offer_link_resolver::infrastructure::console::{
    ConsoleBrowser, ConsoleDiagnostics, ConsoleNavigator,
};
use offer_link_resolver::infrastructure::routing::PatternRouteTable;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for resolving offer deep links.
#[derive(Parser)]
#[command(name = "resolve-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a link and show what the app would do
    Resolve {
        /// Link to resolve (e.g., "app://open/giftcard?merchant=Amazon")
        url: String,

        /// Open external links in the embedded browser
        #[arg(long)]
        in_app: bool,

        /// JSON file with gift-card configs
        #[arg(short, long)]
        catalog: Option<String>,

        /// Deep-link prefix stripped before route matching
        #[arg(short, long)]
        prefix: Option<String>,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// List route patterns
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            url,
            in_app,
            catalog,
            prefix,
            json,
        } => handle_resolve(url, in_app, catalog, prefix, json).await?,
        Commands::Routes => handle_routes(),
    }

    Ok(())
}

/// Resolves one link and dispatches it to the console ports.
async fn handle_resolve(
    url: String,
    in_app: bool,
    catalog: Option<String>,
    prefix: Option<String>,
    json: bool,
) -> Result<()> {
    let prefix = prefix
        .or_else(|| std::env::var("APP_DEEPLINK_PREFIX").ok())
        .unwrap_or_else(|| DEFAULT_DEEPLINK_PREFIX.to_string());
    let catalog_path = catalog.or_else(|| std::env::var("GIFT_CARD_CATALOG_PATH").ok());

    let cards = load_cards(catalog_path.as_deref()).await?;

    let resolver = LinkResolver::new(prefix, Arc::new(PatternRouteTable::default()));
    let resolution = resolver.resolve(&InboundLink::new(url, in_app), &cards);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    print_resolution(&resolution, cards.len());

    let dispatcher = OfferDispatcher::new(
        Arc::new(ConsoleNavigator),
        Arc::new(ConsoleBrowser),
        Arc::new(ConsoleDiagnostics),
    );
    dispatcher
        .dispatch(resolution)
        .await
        .context("Failed to dispatch resolution")?;

    Ok(())
}

/// Loads gift cards from the catalog file, or none without a file.
async fn load_cards(path: Option<&str>) -> Result<Vec<GiftCardConfig>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let catalog = InMemoryCatalog::from_json_file(path)
        .await
        .with_context(|| format!("Failed to load catalog from {}", path))?;
    let snapshot = catalog.snapshot().await?;

    Ok(snapshot.cards.to_vec())
}

fn print_resolution(resolution: &Resolution, catalog_size: usize) {
    println!(
        "{} {} ({} gift cards in catalog)",
        "outcome:".bold(),
        resolution.outcome.kind().cyan().bold(),
        catalog_size
    );

    match &resolution.outcome {
        ResolutionOutcome::NavigateToDomain { record, screen } => {
            println!("  card:   {} ({})", record.label().green(), record.currency);
            println!("  screen: {} → {}", screen.navigator(), screen.name());
        }
        ResolutionOutcome::NavigateToFallbackScreen { screen } => {
            println!("  screen: {} → {}", screen.navigator(), screen.name());
        }
        ResolutionOutcome::OpenExternal {
            url,
            use_in_app_browser,
        } => {
            let browser = if *use_in_app_browser {
                "in-app"
            } else {
                "system"
            };
            println!("  url:     {}", url);
            println!("  browser: {}", browser);
        }
        ResolutionOutcome::NoAction => {
            println!("  {}", "nothing to do".dimmed());
        }
    }
}

fn handle_routes() {
    let table = PatternRouteTable::default();

    println!("{}", "Route patterns (first match wins):".bold());
    println!("{}", "─".repeat(40));
    for pattern in table.patterns() {
        println!(
            "  {} /{}",
            format!("{:<10}", pattern.name()).cyan(),
            pattern.pattern()
        );
    }
}
