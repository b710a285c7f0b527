//! Error handling module for the purge tool.
//!
//! This module provides error handling for the cleanup run with:
//! - A single top-level error type used throughout the crate
//! - Specific kinds for connection, operation and configuration failures
//! - Concise formatting of MongoDB driver errors
//!
//! # Example
//!
//! ```rust,no_run
//! use mongopurge::error::{Result, PurgeError};
//!
//! fn example_operation() -> Result<()> {
//!     // Store operations automatically convert driver errors
//!     // into [`PurgeError`]
//!     Ok(())
//! }
//! ```

pub mod kinds;
pub mod mongo;

// Re-export commonly used types
pub use kinds::{ConfigError, ConnectionError, OperationError, PurgeError, Result};
