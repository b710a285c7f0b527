//! In-memory store used by drain and orchestration tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use bson::Bson;

use crate::error::{OperationError, Result};

use super::{DocumentRef, DocumentStore};

/// In-memory [`DocumentStore`] that records every committed batch.
///
/// Collections iterate in name order, which keeps test expectations
/// deterministic. `fail_collection` makes any fetch against that collection
/// fail, for abort-on-error tests.
#[derive(Debug)]
pub(crate) struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<DocumentRef>>>,
    commits: Mutex<Vec<(String, usize)>>,
    fail_collection: Option<String>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            collections: Mutex::new(BTreeMap::new()),
            commits: Mutex::new(Vec::new()),
            fail_collection: None,
        }
    }

    /// Make every fetch against `name` fail with a store error
    pub(crate) fn fail_on(mut self, name: &str) -> Self {
        self.fail_collection = Some(name.to_string());
        self
    }

    /// Register a collection holding `count` synthetic documents
    pub(crate) fn with_collection(self, name: &str, count: usize) -> Self {
        let docs = (0..count)
            .map(|i| DocumentRef::new(Bson::Int64(i as i64)))
            .collect();
        self.collections
            .lock()
            .unwrap()
            .insert(name.to_string(), docs);
        self
    }

    /// Sizes of every committed batch, in commit order
    pub(crate) fn committed_batches(&self, collection: &str) -> Vec<usize> {
        self.commits
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == collection)
            .map(|(_, size)| *size)
            .collect()
    }

    /// Total number of commits across all collections
    pub(crate) fn commit_count(&self) -> usize {
        self.commits.lock().unwrap().len()
    }

    /// Documents currently remaining in `collection`
    pub(crate) fn remaining(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list_collections(&self) -> Result<Vec<String>> {
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }

    async fn fetch_page(&self, collection: &str, limit: usize) -> Result<Vec<DocumentRef>> {
        if self.fail_collection.as_deref() == Some(collection) {
            return Err(OperationError::StoreUnavailable("injected failure".to_string()).into());
        }

        let collections = self.collections.lock().unwrap();
        let docs = collections.get(collection).cloned().unwrap_or_default();
        Ok(docs.into_iter().take(limit).collect())
    }

    async fn delete_batch(&self, collection: &str, refs: &[DocumentRef]) -> Result<u64> {
        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection.to_string()).or_default();

        let before = docs.len();
        docs.retain(|doc_ref| !refs.contains(doc_ref));
        let deleted = (before - docs.len()) as u64;

        self.commits
            .lock()
            .unwrap()
            .push((collection.to_string(), refs.len()));

        Ok(deleted)
    }
}
