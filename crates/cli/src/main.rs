//! Pantry CLI - Command-line access to the pantry.
//!
//! # Usage
//!
//! ```bash
//! # Add an item, expiring on a date
//! pantry add Milk --quantity 2 --expires 2026-10-24 --regular
//!
//! # Add an item by scanning its barcode (keyboard-wedge reader)
//! pantry add --scan
//!
//! # What is about to expire, and what needs buying
//! pantry reminders
//!
//! # Cook a recipe
//! pantry cook Pancakes
//! ```
//!
//! # Commands
//!
//! - `list`, `add`, `use`, `delete` - Inventory
//! - `reminders` - Expiry and restock reminders
//! - `recipes`, `cook` - Recipe feasibility and cooking
//! - `cheapest` - Cheapest store for an item
//! - `whoami`, `sign-in`, `sign-out` - Signed-in user
//!
//! The CLI shares the web server's data directory and environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pantry_core::ItemId;
use pantry_core::identity::GoogleIdentity;
use pantry_web::config::{
    catalog_path_from_env, data_dir_from_env, google_client_id_from_env, settings_from_env,
};
use pantry_web::state::today;
use pantry_web::store::{FileStore, load_catalog};

mod commands;
mod scanner;

use commands::inventory::AddArgs;
use commands::{CommandError, Pantry};
use scanner::StdinScanner;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "Pantry tracker")]
struct Cli {
    /// Data directory (overrides `PANTRY_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Recipe and price catalog YAML (overrides `PANTRY_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List inventory
    List,
    /// Add an item
    Add(AddArgs),
    /// Use one step of an item
    Use {
        /// Item id, as shown by `list`
        id: ItemId,
    },
    /// Remove an item
    Delete {
        /// Item id, as shown by `list`
        id: ItemId,
    },
    /// Show expiry and restock reminders
    Reminders,
    /// Show which recipes can be cooked
    Recipes,
    /// Cook a recipe
    Cook {
        /// Recipe name
        recipe: String,
    },
    /// Show the cheapest store for an item
    Cheapest {
        /// Item name
        item: String,
    },
    /// Show the signed-in user
    Whoami,
    /// Sign in with a Google ID token
    SignIn {
        /// ID token delivered by Google Identity Services
        #[arg(short, long)]
        credential: String,
    },
    /// Sign out
    SignOut,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pantry=info,pantry_core=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(lines) => {
            for line in lines {
                tracing::info!("{line}");
            }
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Vec<String>, CommandError> {
    let data_dir = cli.data_dir.unwrap_or_else(data_dir_from_env);
    let catalog_path = cli.catalog.or_else(catalog_path_from_env);

    let store = FileStore::open(data_dir)?;
    let catalog = load_catalog(catalog_path.as_deref())?;
    let mut pantry = Pantry::open(Box::new(store), catalog, settings_from_env()?);

    let lines = match cli.command {
        Commands::List => commands::inventory::list(&pantry),
        Commands::Add(args) => commands::inventory::add(&mut pantry, args, StdinScanner::stdin).await?,
        Commands::Use { id } => commands::inventory::use_item(&mut pantry, id)?,
        Commands::Delete { id } => commands::inventory::delete(&mut pantry, id)?,
        Commands::Reminders => commands::reminders::reminders(&pantry, today()),
        Commands::Recipes => commands::recipes::recipes(&pantry),
        Commands::Cook { recipe } => commands::recipes::cook(&mut pantry, &recipe)?,
        Commands::Cheapest { item } => commands::recipes::cheapest(&pantry, &item),
        Commands::Whoami => commands::account::whoami(&pantry),
        Commands::SignIn { credential } => {
            let identity = GoogleIdentity::new(google_client_id_from_env().unwrap_or_default());
            commands::account::sign_in(&mut pantry, &identity, &credential)?
        }
        Commands::SignOut => commands::account::sign_out(&mut pantry)?,
    };

    Ok(lines)
}
