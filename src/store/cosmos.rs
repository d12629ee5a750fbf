//! Cosmos DB-backed extract store
//!
//! This module provides the connected store handle. The handle can only be
//! obtained through [`ExtractStore::connect`], so every instance is backed by
//! a database and container that existed at connection time.

use crate::config::CosmosSettings;
use crate::domain::{CosmosDbError, Result, RfpStoreError, StaffingExtract, STATUS_EXTRACTED};
use crate::store::traits::ExtractRepository;
use async_trait::async_trait;
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::ContainerClient;
use azure_data_cosmos::{CosmosClient, CosmosClientOptions, ItemOptions, PartitionKey};
use futures::stream::StreamExt;
use secrecy::ExposeSecret;

/// Connected Cosmos DB store for staffing extracts
///
/// Holds a resolved container client. Constructing one requires a successful
/// [`connect`](ExtractStore::connect), which verifies that the configured
/// database and container exist.
pub struct ExtractStore {
    /// Resolved container client
    container: ContainerClient,

    /// Settings the store was connected with
    settings: CosmosSettings,
}

impl ExtractStore {
    /// Connect to Cosmos DB and resolve the configured database and container
    ///
    /// # Errors
    ///
    /// Returns [`CosmosDbError::DatabaseNotFound`] or
    /// [`CosmosDbError::ContainerNotFound`] if the named resources do not
    /// exist, and [`CosmosDbError::ConnectionFailed`] for any other failure
    /// during resolution. Failures are logged before being returned; a failed
    /// connect leaves nothing behind, so retrying means calling `connect`
    /// again.
    pub async fn connect(settings: CosmosSettings) -> Result<Self> {
        let key_str: String = settings.key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&settings.endpoint, key, options).map_err(|e| {
            tracing::error!(error = %e, "Failed to create Cosmos client");
            RfpStoreError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                "Failed to create Cosmos client: {e}"
            )))
        })?;

        let database = client.database_client(&settings.database_name);
        database.read(None).await.map_err(|e| {
            if is_not_found(&e) {
                RfpStoreError::CosmosDb(CosmosDbError::DatabaseNotFound(
                    settings.database_name.clone(),
                ))
            } else {
                tracing::error!(error = %e, database = %settings.database_name, "Failed to read database");
                RfpStoreError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                    "Failed to read database {}: {e}",
                    settings.database_name
                )))
            }
        })?;

        let container = database.container_client(&settings.container_name);
        container.read(None).await.map_err(|e| {
            if is_not_found(&e) {
                RfpStoreError::CosmosDb(CosmosDbError::ContainerNotFound(
                    settings.container_name.clone(),
                ))
            } else {
                tracing::error!(error = %e, container = %settings.container_name, "Failed to read container");
                RfpStoreError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                    "Failed to read container {}: {e}",
                    settings.container_name
                )))
            }
        })?;

        tracing::info!(
            database = %settings.database_name,
            container = %settings.container_name,
            "Connected to Cosmos DB"
        );

        Ok(Self {
            container,
            settings,
        })
    }

    /// Get the database name
    pub fn database_name(&self) -> &str {
        &self.settings.database_name
    }

    /// Get the container name
    pub fn container_name(&self) -> &str {
        &self.settings.container_name
    }
}

#[async_trait]
impl ExtractRepository for ExtractStore {
    async fn upsert_extract(&self, extract: StaffingExtract) -> Result<StaffingExtract> {
        let id = extract.id.clone();
        // Container is partitioned on /id
        let partition_key = PartitionKey::from(id.as_str().to_string());

        tracing::debug!(id = %id, "Upserting staffing extract");

        // The SDK omits response bodies on writes by default; request the
        // content response so the stored representation comes back.
        let options = ItemOptions {
            enable_content_response_on_write: true,
            ..Default::default()
        };

        let response = self
            .container
            .upsert_item(partition_key, extract, Some(options))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id = %id, "Failed to upsert staffing extract");
                RfpStoreError::CosmosDb(CosmosDbError::UpsertFailed(format!(
                    "Failed to upsert extract {id}: {e}"
                )))
            })?;

        let stored: StaffingExtract = response.into_raw_body().json().map_err(|e| {
            tracing::error!(error = %e, id = %id, "Failed to deserialize upsert response");
            RfpStoreError::CosmosDb(CosmosDbError::DeserializationFailed(format!(
                "Failed to deserialize upsert response for {id}: {e}"
            )))
        })?;

        tracing::debug!(id = %id, "Staffing extract upserted");

        Ok(stored)
    }

    async fn find_extracted(&self) -> Result<Vec<StaffingExtract>> {
        let query = extracted_query();

        tracing::debug!(query = %query, "Querying extracted documents");

        // An empty partition key runs the query across all partitions
        let mut query_response = self
            .container
            .query_items::<StaffingExtract>(query, (), None)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create query");
                RfpStoreError::CosmosDb(CosmosDbError::QueryFailed(format!(
                    "Failed to create query: {e}"
                )))
            })?;

        let mut extracts = Vec::new();
        while let Some(item) = query_response.next().await {
            match item {
                Ok(extract) => extracts.push(extract),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to query extracted documents");
                    return Err(RfpStoreError::CosmosDb(CosmosDbError::QueryFailed(
                        format!("Failed to query extracted documents: {e}"),
                    )));
                }
            }
        }

        tracing::debug!(count = extracts.len(), "Query returned extracts");

        Ok(extracts)
    }
}

/// The fixed filter for documents awaiting the next pipeline stage
fn extracted_query() -> String {
    format!("SELECT * FROM c WHERE c.status = '{STATUS_EXTRACTED}'")
}

/// Classify an SDK error as a missing-resource response
fn is_not_found(e: &azure_core::Error) -> bool {
    let message = e.to_string();
    message.contains("404") || message.contains("NotFound")
}
