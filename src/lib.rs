//! # rfpstore - Cosmos DB repository for RFP staffing extracts
//!
//! A thin data-access layer over Azure Cosmos DB for the RFP staffing
//! pipeline: connection settings come from the environment, and the store
//! exposes two operations — upsert a staffing extract document and query all
//! documents still in the `rfp_extracted` status.
//!
//! ## Architecture
//!
//! - [`config`] - Environment-sourced settings and secret handling
//! - [`domain`] - The [`StaffingExtract`](domain::StaffingExtract) document
//!   model and error types
//! - [`store`] - The [`ExtractRepository`](store::ExtractRepository) trait and
//!   its Cosmos DB implementation
//! - [`logging`] - Structured logging setup
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use rfpstore::config::CosmosSettings;
//! use rfpstore::domain::{ExtractId, StaffingExtract};
//! use rfpstore::store::{ExtractRepository, ExtractStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = CosmosSettings::from_env()?;
//!     let store = ExtractStore::connect(settings).await?;
//!
//!     let extract = StaffingExtract::builder()
//!         .id(ExtractId::generate())
//!         .build()?;
//!
//!     let stored = store.upsert_extract(extract).await?;
//!     println!("Stored extract {}", stored.id);
//!
//!     let pending = store.find_extracted().await?;
//!     println!("{} extracts awaiting processing", pending.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! All fallible operations return [`domain::Result`]. The connected store
//! handle is only obtainable through the fallible
//! [`ExtractStore::connect`](store::ExtractStore::connect), so data
//! operations can never run against an unresolved container.

pub mod config;
pub mod domain;
pub mod logging;
pub mod store;
