//! Command implementations.
//!
//! Every command builds the same pieces the web application uses:
//! configuration from the environment, the local store slot, and the remote
//! directory API client.

use thiserror::Error;

use crewlist_core::UserFormInput;
use crewlist_web::config::{AppConfig, ConfigError};
use crewlist_web::directory;
use crewlist_web::remote::{DirectoryApiClient, RemoteError};
use crewlist_web::resolver::{self, ResolveError, ResolvedUser};
use crewlist_web::store::{LocalStore, StoreError, StoreSlot};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote directory API call failed.
    #[error("Remote directory error: {0}")]
    Remote(#[from] RemoteError),

    /// Profile lookup failed.
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// The store slot write was rejected.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Form input was rejected.
    #[error("Invalid input:{0}")]
    InvalidInput(String),
}

async fn open_store(config: &AppConfig) -> LocalStore {
    let store = LocalStore::open(StoreSlot::new(&config.store_path)).await;
    if let Some(notice) = store.take_notice() {
        tracing::warn!("{notice}");
    }
    store
}

/// Print the unified directory, optionally filtered by name.
pub async fn list(search: &str) -> Result<(), CommandError> {
    let config = AppConfig::from_env()?;
    let client = DirectoryApiClient::new(&config.api_url);
    let store = open_store(&config).await;

    let remote = client.list_users().await?;
    let local = store.all();
    let entries = directory::filter_by_name(directory::unified(&remote, &local), search);

    if entries.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("{:<38} {:<24} {:<30} SOURCE", "ID", "NAME", "EMAIL");
    for entry in &entries {
        let source = match entry.source {
            directory::Source::Remote => "remote",
            directory::Source::Local => "local",
        };
        println!(
            "{:<38} {:<24} {:<30} {source}",
            entry.id, entry.name, entry.email
        );
    }
    println!("{} user(s)", entries.len());

    Ok(())
}

/// Print a single user's profile.
pub async fn show(id: &str) -> Result<(), CommandError> {
    let config = AppConfig::from_env()?;
    let client = DirectoryApiClient::new(&config.api_url);
    let store = open_store(&config).await;

    match resolver::resolve(&store, &client, id).await? {
        ResolvedUser::Local(user) => {
            println!("{} (local)", user.name);
            println!("  id:    {}", user.id);
            println!("  email: {}", user.email);
            println!("  age:   {}", user.age);
            println!("  role:  {}", user.role);
        }
        ResolvedUser::Remote(user) => {
            println!("{} (remote)", user.name);
            println!("  id:    {}", user.id);
            println!("  email: {}", user.email);
            if let Some(phone) = &user.phone {
                println!("  phone: {phone}");
            }
            if let Some(website) = &user.website {
                println!("  web:   {website}");
            }
            if let Some(company) = &user.company {
                println!("  company: {}", company.name);
            }
            if let Some(address) = &user.address {
                println!(
                    "  address: {}, {}, {} {}",
                    address.street, address.suite, address.city, address.zipcode
                );
            }
        }
    }

    Ok(())
}

/// Validate and persist a new local user.
pub async fn add(
    name: String,
    email: String,
    age: String,
    role: String,
) -> Result<(), CommandError> {
    let config = AppConfig::from_env()?;
    let store = open_store(&config).await;

    let input = UserFormInput {
        name,
        email,
        age,
        role,
    };
    let data = input.validate().map_err(|errors| {
        let mut message = String::new();
        for error in [errors.name, errors.email, errors.age, errors.role]
            .into_iter()
            .flatten()
        {
            message.push_str("\n  - ");
            message.push_str(error.message);
        }
        CommandError::InvalidInput(message)
    })?;

    let (user, saved) = store.create(data).await;
    saved?;
    println!("Created local user {} ({})", user.name, user.id);

    Ok(())
}

/// Remove a local user by identifier.
pub async fn remove(id: &str) -> Result<(), CommandError> {
    let config = AppConfig::from_env()?;
    let store = open_store(&config).await;

    let existed = store.find(id).is_some();
    store.remove(id).await?;

    if existed {
        println!("Removed local user {id}");
    } else {
        println!("No local user with id {id}; nothing removed");
    }

    Ok(())
}
