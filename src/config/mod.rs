//! Configuration management for rfpstore.
//!
//! Settings come from the process environment (optionally seeded from a
//! `.env` file by the binary). All four Cosmos DB variables are required:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `AZURE_COSMOS_ENDPOINT` | account endpoint URL |
//! | `AZURE_COSMOS_KEY` | account access key |
//! | `AZURE_COSMOS_DATABASE_NAME` | database to open |
//! | `AZURE_COSMOS_CONTAINER_NAME` | container within that database |
//!
//! ```rust,no_run
//! use rfpstore::config::CosmosSettings;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = CosmosSettings::from_env()?;
//! println!("Database: {}", settings.database_name);
//! # Ok(())
//! # }
//! ```

pub mod secret;
pub mod settings;

// Re-export commonly used types
pub use secret::{secret_string, SecretString, SecretValue};
pub use settings::{
    CosmosSettings, LoggingConfig, ENV_COSMOS_CONTAINER_NAME, ENV_COSMOS_DATABASE_NAME,
    ENV_COSMOS_ENDPOINT, ENV_COSMOS_KEY,
};
