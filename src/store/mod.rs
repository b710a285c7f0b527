//! Store access for the purge tool
//!
//! This module defines the narrow surface the purge logic needs from the
//! backing document store:
//! - Enumerating top-level collections
//! - Fetching a bounded page of document references from a collection
//! - Deleting a batch of references in one atomic commit
//!
//! The production implementation is [`MongoStore`]; tests drive the same
//! trait with an in-memory store.

use async_trait::async_trait;
use bson::Bson;

use crate::error::Result;

mod mongo;

pub use mongo::MongoStore;

#[cfg(test)]
pub(crate) mod mock;

/// Maximum number of documents the store accepts in one batch commit.
///
/// Batch sizes are validated against this bound before a run starts, so a
/// commit can never be rejected for its size mid-collection.
pub const MAX_BATCH_SIZE: usize = 500;

/// Opaque handle to a single document, sufficient to request its deletion.
///
/// Wraps the document's `_id` value; the payload is never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRef(Bson);

impl DocumentRef {
    /// Create a reference from a raw `_id` value
    pub fn new(id: Bson) -> Self {
        Self(id)
    }

    /// The underlying `_id` value
    pub fn id(&self) -> &Bson {
        &self.0
    }
}

impl From<Bson> for DocumentRef {
    fn from(id: Bson) -> Self {
        Self(id)
    }
}

/// Capabilities the purge logic requires from the backing store.
///
/// Each method maps to one round trip. `fetch_page` always asks for the
/// "first N remaining" documents, so references already deleted by a prior
/// commit never show up again within the same drain pass.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Enumerate all top-level collection names, in store order.
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Fetch up to `limit` document references currently in `collection`.
    async fn fetch_page(&self, collection: &str, limit: usize) -> Result<Vec<DocumentRef>>;

    /// Delete the given references from `collection` in one commit.
    ///
    /// Returns the number of documents the store reports as deleted.
    async fn delete_batch(&self, collection: &str, refs: &[DocumentRef]) -> Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_ref_wraps_id() {
        let doc_ref = DocumentRef::new(Bson::Int64(42));
        assert_eq!(doc_ref.id(), &Bson::Int64(42));

        let from_ref: DocumentRef = Bson::String("abc".to_string()).into();
        assert_eq!(from_ref.id(), &Bson::String("abc".to_string()));
    }
}
