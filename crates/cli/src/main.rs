//! Backoffice CLI - Operator access to the backend services.
//!
//! # Usage
//!
//! ```bash
//! # Show where each domain resolves
//! bo-cli endpoints
//!
//! # CRUD against a collection
//! bo-cli products list
//! bo-cli orders get o1
//! bo-cli customers delete c1
//! ```
//!
//! # Commands
//!
//! - `endpoints` - Resolved base URL and path prefix per domain
//! - `orders`, `products`, `customers` - `list`, `get`, `create`, `update`, `delete`
//!
//! Endpoints are read from the same environment variables as the dashboard,
//! including a `.env` file in the working directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use backoffice_admin::api::ApiClient;
use backoffice_admin::config::ServicesConfig;
use backoffice_core::{Customer, Order, Product};
use clap::{Parser, Subcommand};

mod commands;

use commands::resources::ResourceAction;

#[derive(Parser)]
#[command(name = "bo-cli")]
#[command(author, version, about = "Backoffice CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved backend endpoints
    Endpoints,
    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = match cli.command {
        Commands::Endpoints => commands::endpoints::list()?,
        Commands::Orders { action } => {
            commands::resources::execute::<Order>(&client()?, action).await?
        }
        Commands::Products { action } => {
            commands::resources::execute::<Product>(&client()?, action).await?
        }
        Commands::Customers { action } => {
            commands::resources::execute::<Customer>(&client()?, action).await?
        }
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

fn client() -> Result<ApiClient, commands::CommandError> {
    let config = ServicesConfig::from_env()?;
    Ok(ApiClient::from_config(&config)?)
}
