use crate::core::errors::FlatgateError;
use crate::core::models::user::User;
use async_trait::async_trait;
use std::sync::Arc;

/// Whole-list persistence for user records.
///
/// Implementations load and replace the complete ordered list; there is no
/// per-record update and no locking between concurrent writers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every stored user in insertion order. A missing store is empty.
    async fn read_all(&self) -> Result<Vec<User>, FlatgateError>;
    /// Replaces the stored list with `users`.
    async fn write_all(&self, users: &[User]) -> Result<(), FlatgateError>;
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    async fn read_all(&self) -> Result<Vec<User>, FlatgateError> {
        (**self).read_all().await
    }

    async fn write_all(&self, users: &[User]) -> Result<(), FlatgateError> {
        (**self).write_all(users).await
    }
}

pub mod in_memory;
pub mod json_file;
