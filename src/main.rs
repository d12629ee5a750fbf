use rfpstore::config::{CosmosSettings, LoggingConfig};
use rfpstore::domain::{ExtractId, Result, RfpStoreError, StaffingExtract};
use rfpstore::logging::init_logging;
use rfpstore::store::{ExtractRepository, ExtractStore};
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let logging_config = LoggingConfig::default();
    let _guard = match init_logging("info", &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "rfpstore - RFP staffing extract sample"
    );

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Sample run failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Build a fresh staffing extract, store it, and print the stored document
async fn run() -> Result<()> {
    let settings = CosmosSettings::from_env()?;
    let store = ExtractStore::connect(settings).await?;

    let extract = StaffingExtract::builder()
        .id(ExtractId::generate())
        .build()
        .map_err(RfpStoreError::Validation)?;

    let stored = store.upsert_extract(extract).await?;

    println!("{}", serde_json::to_string_pretty(&stored)?);

    Ok(())
}
