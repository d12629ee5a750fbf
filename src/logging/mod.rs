//! Logging and observability
//!
//! Structured logging built on the `tracing` crate:
//!
//! ```no_run
//! use rfpstore::config::LoggingConfig;
//! use rfpstore::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
