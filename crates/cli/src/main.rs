//! Crewlist CLI - directory browsing and local user management.
//!
//! # Usage
//!
//! ```bash
//! # List the unified directory (remote + local)
//! crew-cli list
//!
//! # Search by name, case-insensitive
//! crew-cli list --search leanne
//!
//! # Show a single profile (local store first, then remote)
//! crew-cli show 3
//!
//! # Add a local user (same validation as the web form)
//! crew-cli add --name "Ada Lovelace" --email ada@calc.org --age 36 --role Editor
//!
//! # Remove a local user by id (no-op if unknown)
//! crew-cli remove 6f9619ff-8b86-4d01-b42d-00cf4fc964ff
//! ```
//!
//! # Commands
//!
//! - `list` - Print the unified directory, optionally filtered
//! - `show` - Print one user's profile
//! - `add` - Validate and persist a new local user
//! - `remove` - Remove a local user from the store slot

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "crew-cli")]
#[command(author, version, about = "Crewlist CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the unified directory (remote records first, then local)
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a single user's profile by identifier
    Show {
        /// Remote numeric id or local string id
        id: String,
    },
    /// Add a new local user
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Age (must be 18 or older)
        #[arg(short, long)]
        age: String,

        /// Role (`Admin`, `Editor`, `Viewer`)
        #[arg(short, long)]
        role: String,
    },
    /// Remove a local user by identifier (no-op if unknown)
    Remove {
        /// Local string id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::List { search } => commands::list(search.as_deref().unwrap_or("")).await?,
        Commands::Show { id } => commands::show(&id).await?,
        Commands::Add {
            name,
            email,
            age,
            role,
        } => commands::add(name, email, age, role).await?,
        Commands::Remove { id } => commands::remove(&id).await?,
    }
    Ok(())
}
