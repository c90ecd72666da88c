use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use directory::{DirectoryPage, PageStatus};
use pipeline::MerchantSelector;
use sources::JsonFileSource;
use std::path::PathBuf;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Perk Explorer - browse the public perk directory
#[derive(Parser)]
#[command(name = "perk-explorer")]
#[command(about = "Browse and filter the public perk directory", long_about = None)]
struct Cli {
    /// Path to the perk dataset (a JSON array of perk records)
    #[arg(short, long, default_value = "data/perks.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List perks, optionally narrowed by name and merchant
    List {
        /// Case-insensitive substring to match against perk titles
        #[arg(long)]
        name: Option<String>,

        /// Exact merchant name to keep (omit for all merchants)
        #[arg(long)]
        merchant: Option<String>,
    },

    /// Show the distinct merchants present in the directory
    Merchants,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading perks from {}...", cli.data.display());
    let start = Instant::now();

    let cancel = CancellationToken::new();
    let mut page = DirectoryPage::new(JsonFileSource::new(&cli.data), cancel.clone());

    match page.load().await {
        PageStatus::Loaded => {
            println!("{} Loaded directory in {:?}", "✓".green(), start.elapsed());
        }
        PageStatus::Error(reason) => bail!("Failed to load perks: {}", reason),
        PageStatus::Loading => bail!("Perk load did not complete"),
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { name, merchant } => handle_list(page, name, merchant),
        Commands::Merchants => handle_merchants(page),
    }
}

/// Handle the 'list' command
fn handle_list(
    mut page: DirectoryPage<JsonFileSource>,
    name: Option<String>,
    merchant: Option<String>,
) -> Result<()> {
    if let Some(name) = name {
        page.set_name_query(name);
    }
    if let Some(merchant) = merchant {
        page.set_merchant(MerchantSelector::Only(merchant));
    }

    let result = page.visible();

    println!("{}", "Perk Directory:".bold().blue());
    for (i, perk) in result.items.iter().enumerate() {
        println!(
            "{}. {} {}",
            (i + 1).to_string().green(),
            perk.title,
            format!("[{}]", perk.merchant).cyan()
        );
    }

    if let Some(summary) = page.summary() {
        println!("{}", summary.bold());
    }
    Ok(())
}

/// Handle the 'merchants' command
fn handle_merchants(page: DirectoryPage<JsonFileSource>) -> Result<()> {
    println!("{}", "Merchants:".bold().blue());
    for option in page.merchant_options() {
        if let MerchantSelector::Only(name) = option {
            println!("{}{}", "• ".green(), name);
        }
    }
    Ok(())
}
