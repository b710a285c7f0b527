//! Purge engine
//!
//! This module contains the two halves of a cleanup run:
//! - [`BatchDeleter`]: drains a single collection with bounded batch commits
//! - [`Orchestrator`]: walks every collection, applies the preserve rule and
//!   reports per-collection results
//!
//! Execution is strictly sequential: one collection finishes before the next
//! starts, and within a collection one batch commits before the next page is
//! fetched. The store is shared and non-exclusive, so a concurrent writer
//! can extend a drain or keep it from converging; no snapshot isolation is
//! attempted.

mod deleter;
mod orchestrator;

pub use deleter::{BatchDeleter, DeletionTally};
pub use orchestrator::Orchestrator;
