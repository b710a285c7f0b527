//! Batched collection draining

use tracing::debug;

use crate::error::{ConfigError, OperationError, Result};
use crate::store::{DocumentStore, MAX_BATCH_SIZE};

/// Running count for one collection's drain.
///
/// Created when the drain starts and dropped once the result line has been
/// printed; nothing survives across collections.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeletionTally {
    /// Documents deleted so far
    pub deleted: u64,

    /// Batches committed so far
    pub batches: u64,
}

impl DeletionTally {
    fn record(&mut self, deleted: u64) {
        self.deleted += deleted;
        self.batches += 1;
    }

    /// True when the collection held no documents at all
    pub fn is_empty(&self) -> bool {
        self.batches == 0
    }
}

/// Drains collections by repeatedly fetching and deleting bounded batches.
///
/// Each iteration asks the store for the first `batch_size` documents still
/// in the collection and deletes exactly those in one commit. Documents
/// removed by an earlier commit no longer match the fetch, so no reference
/// is ever processed twice within a pass. The loop terminates once a fetch
/// comes back empty.
#[derive(Debug)]
pub struct BatchDeleter<'a, S: DocumentStore> {
    store: &'a S,
    batch_size: usize,
}

impl<'a, S: DocumentStore> BatchDeleter<'a, S> {
    /// Create a deleter with the given batch size.
    ///
    /// The size is validated here, before any deletion begins: a value of
    /// zero or above [`MAX_BATCH_SIZE`] is a configuration error, not a
    /// runtime failure halfway through a collection.
    ///
    /// # Arguments
    /// * `store` - Store handle shared by the whole run
    /// * `batch_size` - Documents fetched and committed per iteration
    ///
    /// # Returns
    /// * `Result<Self>` - New deleter or validation error
    pub fn new(store: &'a S, batch_size: usize) -> Result<Self> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "batch_size".to_string(),
                value: batch_size.to_string(),
            }
            .into());
        }

        Ok(Self { store, batch_size })
    }

    /// Delete every document in `collection`, batch by batch.
    ///
    /// Prints a progress line after each committed batch and a result line
    /// once the collection is drained. An already-empty collection reports
    /// distinctly from one drained during this call.
    ///
    /// # Arguments
    /// * `collection` - Name of the collection to drain
    ///
    /// # Returns
    /// * `Result<DeletionTally>` - Totals for the collection, or the first
    ///   fetch/commit error
    pub async fn drain(&self, collection: &str) -> Result<DeletionTally> {
        let mut tally = DeletionTally::default();

        loop {
            let refs = self.store.fetch_page(collection, self.batch_size).await?;
            if refs.is_empty() {
                break;
            }

            if refs.len() > MAX_BATCH_SIZE {
                return Err(OperationError::QuotaExceeded {
                    requested: refs.len(),
                    max: MAX_BATCH_SIZE,
                }
                .into());
            }

            let deleted = self.store.delete_batch(collection, &refs).await?;
            tally.record(deleted);

            debug!(
                "Committed batch of {} from '{}' ({} so far)",
                deleted, collection, tally.deleted
            );
            println!("  ✍️  Deleted {} documents...", tally.deleted);
        }

        if tally.is_empty() {
            println!("ℹ️  Collection '{collection}' was already empty.");
        } else {
            println!(
                "✅ Done: removed a total of {} documents from collection '{collection}'.",
                tally.deleted
            );
        }

        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MemoryStore;

    #[test]
    fn test_rejects_zero_batch_size() {
        let store = MemoryStore::new();
        assert!(BatchDeleter::new(&store, 0).is_err());
    }

    #[test]
    fn test_rejects_batch_size_over_store_maximum() {
        let store = MemoryStore::new();
        let err = BatchDeleter::new(&store, MAX_BATCH_SIZE + 1).unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[tokio::test]
    async fn test_drain_commits_ceil_d_over_b_batches() {
        let store = MemoryStore::new().with_collection("logs", 1200);
        let deleter = BatchDeleter::new(&store, 500).unwrap();

        let tally = deleter.drain("logs").await.unwrap();

        assert_eq!(tally.deleted, 1200);
        assert_eq!(tally.batches, 3);
        assert_eq!(store.committed_batches("logs"), vec![500, 500, 200]);
        assert_eq!(store.remaining("logs"), 0);
    }

    #[tokio::test]
    async fn test_drain_exact_multiple_of_batch_size() {
        let store = MemoryStore::new().with_collection("events", 1000);
        let deleter = BatchDeleter::new(&store, 500).unwrap();

        let tally = deleter.drain("events").await.unwrap();

        assert_eq!(tally.deleted, 1000);
        assert_eq!(store.committed_batches("events"), vec![500, 500]);
    }

    #[tokio::test]
    async fn test_drain_empty_collection_commits_nothing() {
        let store = MemoryStore::new().with_collection("temp", 0);
        let deleter = BatchDeleter::new(&store, 500).unwrap();

        let tally = deleter.drain("temp").await.unwrap();

        assert!(tally.is_empty());
        assert_eq!(tally.deleted, 0);
        assert_eq!(store.commit_count(), 0);
    }

    #[tokio::test]
    async fn test_drain_is_idempotent_on_emptied_collection() {
        let store = MemoryStore::new().with_collection("logs", 42);
        let deleter = BatchDeleter::new(&store, 10).unwrap();

        let first = deleter.drain("logs").await.unwrap();
        assert_eq!(first.deleted, 42);

        let second = deleter.drain("logs").await.unwrap();
        assert!(second.is_empty());
        assert_eq!(second.deleted, 0);
    }

    #[tokio::test]
    async fn test_batch_size_one_commits_one_document_at_a_time() {
        let store = MemoryStore::new().with_collection("tiny", 3);
        let deleter = BatchDeleter::new(&store, 1).unwrap();

        let tally = deleter.drain("tiny").await.unwrap();

        assert_eq!(tally.deleted, 3);
        assert_eq!(store.committed_batches("tiny"), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let store = MemoryStore::new()
            .with_collection("broken", 10)
            .fail_on("broken");
        let deleter = BatchDeleter::new(&store, 5).unwrap();

        let err = deleter.drain("broken").await.unwrap_err();
        assert!(err.to_string().contains("Store unavailable"));
        assert_eq!(store.commit_count(), 0);
    }
}
