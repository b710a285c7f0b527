//! Collection walk and preserve rule

use tracing::info;

use crate::config::PurgeConfig;
use crate::error::Result;
use crate::store::DocumentStore;

use super::deleter::BatchDeleter;

/// Walks every top-level collection and empties all but the preserved one.
///
/// Collections are processed in the order the store enumerates them, which
/// is implementation-defined. A fetch or commit error anywhere aborts the
/// whole run immediately: later collections stay untouched and the current
/// one may be partially deleted.
pub struct Orchestrator<S: DocumentStore> {
    store: S,
    config: PurgeConfig,
}

impl<S: DocumentStore> Orchestrator<S> {
    /// Create an orchestrator over an established store session
    ///
    /// # Arguments
    /// * `store` - Store handle for the tenant database
    /// * `config` - Purge behavior (batch size, preserved collection)
    pub fn new(store: S, config: PurgeConfig) -> Self {
        Self { store, config }
    }

    /// Run the full cleanup.
    ///
    /// # Returns
    /// * `Result<()>` - Success once every collection is processed, or the
    ///   first error encountered
    pub async fn run(&self) -> Result<()> {
        // Batch size is checked here, before anything is enumerated or
        // deleted
        let deleter = BatchDeleter::new(&self.store, self.config.batch_size)?;

        println!(
            "🚀 Starting database cleanup. Only the '{}' collection will be preserved.\n",
            self.config.preserve
        );

        let collections = self.store.list_collections().await?;
        info!("Found {} collections", collections.len());

        for name in collections {
            println!("Scanning collection: '{name}'");

            if name == self.config.preserve {
                info!("Skipping preserved collection '{}'", name);
                println!("🟡 Skipped. '{name}' is preserved.\n");
                continue;
            }

            println!("🔴 Deleting from collection '{name}'...");
            let tally = deleter.drain(&name).await?;
            info!(
                "Collection '{}' drained: {} documents in {} batches",
                name, tally.deleted, tally.batches
            );
            println!();
        }

        println!("🎉 Cleanup complete!");
        Ok(())
    }
}
