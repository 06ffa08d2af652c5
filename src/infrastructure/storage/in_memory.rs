use crate::core::errors::FlatgateError;
use crate::core::models::user::User;
use crate::infrastructure::storage::RecordStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        InMemoryStore {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn read_all(&self) -> Result<Vec<User>, FlatgateError> {
        Ok(self.users.read().await.clone())
    }

    async fn write_all(&self, users: &[User]) -> Result<(), FlatgateError> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}
