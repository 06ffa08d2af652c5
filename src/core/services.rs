use crate::config::Config;
use crate::core::admin_gate::AdminGate;
use crate::core::credentials::CredentialService;
use crate::core::databases::DatabaseBrowser;
use crate::core::errors::FlatgateError;
use crate::core::models::user::Identity;
use crate::infrastructure::storage::RecordStore;
use crate::infrastructure::storage::json_file::JsonFileStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Everything a request handler needs, built once at startup.
pub struct FlatgateService<S: RecordStore> {
    credentials: CredentialService<S>,
    gate: AdminGate,
    databases: DatabaseBrowser,
}

impl FlatgateService<Arc<dyn RecordStore>> {
    /// Wires the file-backed store and browser from `config`.
    pub fn from_config(config: &Config) -> Self {
        info!(
            "Serving users from {} and databases from {}",
            config.users_file().display(),
            config.data_dir.display()
        );
        Self::new(
            Arc::new(JsonFileStore::new(config.users_file())),
            AdminGate::new(config.admin_word.clone()),
            DatabaseBrowser::new(config.data_dir.clone()),
        )
    }
}

impl<S: RecordStore> FlatgateService<S> {
    pub fn new(storage: S, gate: AdminGate, databases: DatabaseBrowser) -> Self {
        FlatgateService {
            credentials: CredentialService::new(storage),
            gate,
            databases,
        }
    }

    pub fn authorize_admin(&self, supplied: &str) -> Result<(), FlatgateError> {
        self.gate.guard(supplied)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Option<Identity>, FlatgateError> {
        self.credentials.sign_in(email, password).await
    }

    // Admin operations below assume `authorize_admin` already passed.

    pub async fn create_user(&self, email: &str, password: &str, name: &str) -> Result<Identity, FlatgateError> {
        self.credentials.create_user(email, password, name).await
    }

    pub async fn list_databases(&self) -> Result<Vec<String>, FlatgateError> {
        self.databases.list_databases().await
    }

    pub async fn read_database(&self, name: &str) -> Result<Value, FlatgateError> {
        self.databases.read_database(name).await
    }
}
