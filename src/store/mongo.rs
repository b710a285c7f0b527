//! MongoDB implementation of the store surface

use futures::stream::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Document, doc};
use tracing::debug;

use crate::error::{OperationError, Result};

use super::{DocumentRef, DocumentStore};

/// Store backed by a MongoDB database handle.
///
/// Holds the tenant database established by the connection manager; one
/// instance serves the whole run.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Create a store over an established database handle
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoStore {
    async fn list_collections(&self) -> Result<Vec<String>> {
        let names = self
            .db
            .list_collection_names()
            .await
            .map_err(|e| OperationError::StoreUnavailable(e.to_string()))?;

        debug!("Found {} collections in '{}'", names.len(), self.db.name());

        Ok(names)
    }

    async fn fetch_page(&self, collection: &str, limit: usize) -> Result<Vec<DocumentRef>> {
        let coll: mongodb::Collection<Document> = self.db.collection(collection);

        // Only the _id is needed to address a document for deletion
        let mut cursor = coll
            .find(doc! {})
            .projection(doc! { "_id": 1 })
            .limit(limit as i64)
            .await
            .map_err(|e| OperationError::StoreUnavailable(e.to_string()))?;

        let mut refs = Vec::with_capacity(limit);
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| OperationError::StoreUnavailable(e.to_string()))?
        {
            if let Some(id) = document.get("_id") {
                refs.push(DocumentRef::new(id.clone()));
            }
        }

        debug!("Fetched {} references from '{}'", refs.len(), collection);

        Ok(refs)
    }

    async fn delete_batch(&self, collection: &str, refs: &[DocumentRef]) -> Result<u64> {
        if refs.is_empty() {
            return Ok(0);
        }

        let coll: mongodb::Collection<Document> = self.db.collection(collection);

        let ids: Vec<_> = refs.iter().map(|r| r.id().clone()).collect();
        let result = coll
            .delete_many(doc! { "_id": { "$in": ids } })
            .await
            .map_err(|e| OperationError::StoreUnavailable(e.to_string()))?;

        debug!(
            "Committed delete of {} documents from '{}'",
            result.deleted_count, collection
        );

        Ok(result.deleted_count)
    }
}
