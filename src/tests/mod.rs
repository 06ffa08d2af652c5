mod config_tests;
mod credential_tests;

use crate::core::admin_gate::AdminGate;
use crate::core::credentials::CredentialService;
use crate::core::databases::DatabaseBrowser;
use crate::core::services::FlatgateService;
use crate::infrastructure::storage::RecordStore;
use crate::infrastructure::storage::in_memory::InMemoryStore;
use crate::infrastructure::storage::json_file::JsonFileStore;
use std::path::Path;
use std::sync::Arc;

pub const TEST_ADMIN_WORD: &str = "open-sesame";

pub fn create_test_credentials() -> CredentialService<InMemoryStore> {
    CredentialService::new(InMemoryStore::new())
}

pub fn create_test_service(data_dir: &Path) -> FlatgateService<Arc<dyn RecordStore>> {
    create_test_service_with(Arc::new(JsonFileStore::new(data_dir.join("users.json"))), data_dir)
}

pub fn create_test_service_with(
    store: Arc<dyn RecordStore>,
    data_dir: &Path,
) -> FlatgateService<Arc<dyn RecordStore>> {
    FlatgateService::new(store, AdminGate::new(TEST_ADMIN_WORD), DatabaseBrowser::new(data_dir))
}
