//! Environment-sourced connection settings
//!
//! All four Cosmos DB settings are required and read from the process
//! environment. Construction fails fast, reporting every missing or empty
//! variable at once rather than the first one found.

use crate::config::secret::{secret_string, SecretString};
use crate::domain::{Result, RfpStoreError};
use secrecy::ExposeSecret;

/// Cosmos DB account endpoint URL
pub const ENV_COSMOS_ENDPOINT: &str = "AZURE_COSMOS_ENDPOINT";

/// Cosmos DB account access key
pub const ENV_COSMOS_KEY: &str = "AZURE_COSMOS_KEY";

/// Logical database to open
pub const ENV_COSMOS_DATABASE_NAME: &str = "AZURE_COSMOS_DATABASE_NAME";

/// Container within that database
pub const ENV_COSMOS_CONTAINER_NAME: &str = "AZURE_COSMOS_CONTAINER_NAME";

/// Cosmos DB connection settings
///
/// The access key is stored securely in memory and automatically zeroized
/// on drop.
#[derive(Debug, Clone)]
pub struct CosmosSettings {
    /// Cosmos DB endpoint URL
    pub endpoint: String,

    /// Cosmos DB access key
    pub key: SecretString,

    /// Database name
    pub database_name: String,

    /// Container name
    pub container_name: String,
}

impl CosmosSettings {
    /// Creates settings from explicit values, validating them
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any value is invalid
    pub fn new(
        endpoint: impl Into<String>,
        key: impl Into<String>,
        database_name: impl Into<String>,
        container_name: impl Into<String>,
    ) -> Result<Self> {
        let settings = Self {
            endpoint: endpoint.into(),
            key: secret_string(key.into()),
            database_name: database_name.into(),
            container_name: container_name.into(),
        };
        settings.validate().map_err(RfpStoreError::Configuration)?;
        Ok(settings)
    }

    /// Reads settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every required variable that is
    /// missing or empty, or if validation of the values fails.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            non_empty_var(ENV_COSMOS_ENDPOINT),
            non_empty_var(ENV_COSMOS_KEY),
            non_empty_var(ENV_COSMOS_DATABASE_NAME),
            non_empty_var(ENV_COSMOS_CONTAINER_NAME),
        )
    }

    /// Builds settings from optional values, collecting missing variables
    fn from_values(
        endpoint: Option<String>,
        key: Option<String>,
        database_name: Option<String>,
        container_name: Option<String>,
    ) -> Result<Self> {
        let mut missing = Vec::new();
        if endpoint.is_none() {
            missing.push(ENV_COSMOS_ENDPOINT);
        }
        if key.is_none() {
            missing.push(ENV_COSMOS_KEY);
        }
        if database_name.is_none() {
            missing.push(ENV_COSMOS_DATABASE_NAME);
        }
        if container_name.is_none() {
            missing.push(ENV_COSMOS_CONTAINER_NAME);
        }

        if !missing.is_empty() {
            return Err(RfpStoreError::Configuration(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        // The unwraps are guarded by the missing-variable check above
        Self::new(
            endpoint.unwrap(),
            key.unwrap(),
            database_name.unwrap(),
            container_name.unwrap(),
        )
    }

    /// Validates the settings
    fn validate(&self) -> std::result::Result<(), String> {
        if self.endpoint.is_empty() {
            return Err(format!("{ENV_COSMOS_ENDPOINT} cannot be empty"));
        }

        if !self.endpoint.starts_with("https://") {
            return Err(format!("{ENV_COSMOS_ENDPOINT} must start with https://"));
        }

        if self.key.expose_secret().is_empty() {
            return Err(format!("{ENV_COSMOS_KEY} cannot be empty"));
        }

        if self.database_name.is_empty() {
            return Err(format!("{ENV_COSMOS_DATABASE_NAME} cannot be empty"));
        }

        if self.container_name.is_empty() {
            return Err(format!("{ENV_COSMOS_CONTAINER_NAME} cannot be empty"));
        }

        Ok(())
    }
}

/// Reads an environment variable, treating empty/whitespace values as unset
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Enable local file logging
    pub local_enabled: bool,

    /// Local log file path
    pub local_path: String,

    /// Log rotation strategy ("daily" or "hourly")
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: "logs".to_string(),
            local_rotation: "daily".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use test_case::test_case;

    // from_env tests mutate process-wide environment state
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn valid() -> (Option<String>, Option<String>, Option<String>, Option<String>) {
        (
            s("https://test.documents.azure.com:443/"),
            s("test-key"),
            s("rfp_db"),
            s("rfp_extracts"),
        )
    }

    #[test]
    fn test_from_values_all_present() {
        let (endpoint, key, db, container) = valid();
        let settings = CosmosSettings::from_values(endpoint, key, db, container).unwrap();
        assert_eq!(settings.endpoint, "https://test.documents.azure.com:443/");
        assert_eq!(settings.database_name, "rfp_db");
        assert_eq!(settings.container_name, "rfp_extracts");
    }

    #[test_case(true, false, false, false ; "endpoint missing")]
    #[test_case(false, true, false, false ; "key missing")]
    #[test_case(false, false, true, false ; "database missing")]
    #[test_case(false, false, false, true ; "container missing")]
    #[test_case(true, true, false, false ; "endpoint and key missing")]
    #[test_case(true, false, true, false ; "endpoint and database missing")]
    #[test_case(false, true, false, true ; "key and container missing")]
    #[test_case(true, true, true, false ; "only container present")]
    #[test_case(true, true, true, true ; "all missing")]
    fn test_from_values_missing_subsets(
        no_endpoint: bool,
        no_key: bool,
        no_db: bool,
        no_container: bool,
    ) {
        let (mut endpoint, mut key, mut db, mut container) = valid();
        if no_endpoint {
            endpoint = None;
        }
        if no_key {
            key = None;
        }
        if no_db {
            db = None;
        }
        if no_container {
            container = None;
        }

        let err = CosmosSettings::from_values(endpoint, key, db, container).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, RfpStoreError::Configuration(_)));
        assert!(msg.contains("Missing required environment variables"));

        // Every missing variable is named
        assert_eq!(no_endpoint, msg.contains(ENV_COSMOS_ENDPOINT));
        assert_eq!(no_key, msg.contains(ENV_COSMOS_KEY));
        assert_eq!(no_db, msg.contains(ENV_COSMOS_DATABASE_NAME));
        assert_eq!(no_container, msg.contains(ENV_COSMOS_CONTAINER_NAME));
    }

    #[test]
    fn test_endpoint_must_be_https() {
        let result = CosmosSettings::new(
            "http://test.documents.azure.com:443/",
            "test-key",
            "rfp_db",
            "rfp_extracts",
        );
        let err = result.unwrap_err();
        assert!(matches!(err, RfpStoreError::Configuration(_)));
        assert!(err.to_string().contains("https://"));
    }

    #[test]
    fn test_from_env_all_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_COSMOS_ENDPOINT, "https://test.documents.azure.com:443/");
        std::env::set_var(ENV_COSMOS_KEY, "test-key");
        std::env::set_var(ENV_COSMOS_DATABASE_NAME, "rfp_db");
        std::env::set_var(ENV_COSMOS_CONTAINER_NAME, "rfp_extracts");

        let settings = CosmosSettings::from_env().unwrap();
        assert_eq!(settings.container_name, "rfp_extracts");

        for name in [
            ENV_COSMOS_ENDPOINT,
            ENV_COSMOS_KEY,
            ENV_COSMOS_DATABASE_NAME,
            ENV_COSMOS_CONTAINER_NAME,
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_from_env_empty_value_is_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_COSMOS_ENDPOINT, "https://test.documents.azure.com:443/");
        std::env::set_var(ENV_COSMOS_KEY, "   ");
        std::env::set_var(ENV_COSMOS_DATABASE_NAME, "rfp_db");
        std::env::set_var(ENV_COSMOS_CONTAINER_NAME, "rfp_extracts");

        let err = CosmosSettings::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_COSMOS_KEY));

        for name in [
            ENV_COSMOS_ENDPOINT,
            ENV_COSMOS_KEY,
            ENV_COSMOS_DATABASE_NAME,
            ENV_COSMOS_CONTAINER_NAME,
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_settings_debug_redacts_key() {
        let settings = CosmosSettings::new(
            "https://test.documents.azure.com:443/",
            "super-secret-key",
            "rfp_db",
            "rfp_extracts",
        )
        .unwrap();

        let debug_output = format!("{settings:?}");
        assert!(!debug_output.contains("super-secret-key"));
    }
}
