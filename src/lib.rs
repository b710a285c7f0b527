//! MongoDB Purge Tool Library
//!
//! This library provides the core functionality for mongopurge, a tool that
//! empties every collection in a database except a preserved one. It can be
//! used as a standalone library to build cleanup tooling.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `connection`: MongoDB connection management and credentials
//! - `error`: Error types and handling
//! - `purge`: Batched drain loop and collection orchestration
//! - `store`: Document store surface and MongoDB implementation
//!
//! # Example
//!
//! ```no_run
//! use mongopurge::config::Config;
//! use mongopurge::connection::ConnectionManager;
//! use mongopurge::purge::Orchestrator;
//! use mongopurge::store::MongoStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let mut manager = ConnectionManager::new(
//!         "mongodb://localhost:27017".to_string(),
//!         config.connection,
//!     );
//!     manager.connect().await?;
//!
//!     let store = MongoStore::new(manager.database("staging")?);
//!     Orchestrator::new(store, config.purge).run().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod connection;
pub mod error;
pub mod purge;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use connection::ConnectionManager;
pub use error::{PurgeError, Result};
pub use purge::{BatchDeleter, DeletionTally, Orchestrator};
pub use store::{DocumentStore, MongoStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
