//! Record store seam between the HTTP handlers and persistence.
//!
//! Handlers only see [`RecordStore`]; the process wires in [`DynamoStore`]
//! at startup and tests substitute the in-memory store.

pub mod dynamodb;
#[cfg(test)]
pub mod memory;

pub use dynamodb::DynamoStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Todo, TodoFields};

/// Failure reported by a record store
///
/// Not-found is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store client or service rejected the call
    #[error("{0}")]
    Backend(String),
    /// A stored item could not be decoded into a todo
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Single-key point access over the todo collection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return up to `limit` records in whatever order the store yields them
    ///
    /// A single malformed stored item fails the whole scan with
    /// [`StoreError::Malformed`].
    async fn scan(&self, limit: usize) -> Result<Vec<Todo>, StoreError>;

    /// Write the full record, replacing any existing record with the same id
    async fn put_item(&self, todo: &Todo) -> Result<(), StoreError>;

    async fn get_item(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// Set `title` and `done` on the record keyed by `id`, creating it if absent
    async fn update_item(&self, id: &str, fields: &TodoFields) -> Result<(), StoreError>;

    /// Remove the record keyed by `id`; absent keys are not an error
    async fn delete_item(&self, id: &str) -> Result<(), StoreError>;
}
