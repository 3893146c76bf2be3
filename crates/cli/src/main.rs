//! Wisata CLI - Management tools for the content API.
//!
//! # Usage
//!
//! ```bash
//! # List tour packages
//! wisata packages list --page 1 --limit 10
//!
//! # Upload gallery images to a package
//! wisata images upload 7 beach.jpg sunset.jpg
//!
//! # Manage categories
//! wisata categories create -n "Hiking" -s hiking
//!
//! # Register an admin account
//! wisata admins create -e admin@example.com -p secret -r super
//! ```
//!
//! # Environment Variables
//!
//! - `WISATA_API_HOST` - Base URL of the content API (fallback: `API_HOST`)
//! - `WISATA_ADMIN_TOKEN` - Bearer token for admin-scoped commands
//! - `WISATA_STORAGE_URL` - Base URL for resolving relative image paths

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use wisata_client::{ClientConfig, WisataClient};

mod commands;

#[derive(Parser)]
#[command(name = "wisata")]
#[command(author, version, about = "Wisata content API management tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tour package operations
    Packages {
        #[command(subcommand)]
        action: commands::packages::PackageAction,
    },
    /// Post operations
    Posts {
        #[command(subcommand)]
        action: commands::posts::PostAction,
    },
    /// Category operations
    Categories {
        #[command(subcommand)]
        action: commands::categories::CategoryAction,
    },
    /// Package gallery image operations
    Images {
        #[command(subcommand)]
        action: commands::images::ImageAction,
    },
    /// Admin account operations
    Admins {
        #[command(subcommand)]
        action: commands::admins::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = WisataClient::new(ClientConfig::from_env()?);

    match cli.command {
        Commands::Packages { action } => commands::packages::run(&client, action).await?,
        Commands::Posts { action } => commands::posts::run(&client, action).await?,
        Commands::Categories { action } => commands::categories::run(&client, action).await?,
        Commands::Images { action } => commands::images::run(&client, action).await?,
        Commands::Admins { action } => commands::admins::run(&client, action).await?,
    }
    Ok(())
}
