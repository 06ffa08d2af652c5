use crate::core::errors::FlatgateError;
use crate::core::models::user::User;
use crate::infrastructure::storage::RecordStore;
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};
use uuid::Uuid;

/// User list persisted as a single pretty-printed JSON array.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// A sibling path unique to one write, so overlapping writers never share it.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(format!(".{}.tmp", Uuid::now_v7()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<User>, FlatgateError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            // A path component that is a plain file also means there is no store yet.
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                debug!("User store {} absent, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(FlatgateError::StoreRead(format!("{}: {}", self.path.display(), e))),
        };

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| FlatgateError::StoreRead(format!("{}: {}", self.path.display(), e)))?;
        if !value.is_array() {
            debug!("User store {} is not a JSON array, treating as empty", self.path.display());
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|e| FlatgateError::StoreRead(format!("{}: {}", self.path.display(), e)))
    }

    async fn write_all(&self, users: &[User]) -> Result<(), FlatgateError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FlatgateError::StoreWrite(format!("{}: {}", parent.display(), e)))?;
        }

        let body = serde_json::to_string_pretty(users)
            .map_err(|e| FlatgateError::InternalServerError(format!("Failed to serialize users: {}", e)))?;

        // Replace via rename so a failed write leaves the previous file in place.
        let temp = self.temp_path();
        let written = match tokio::fs::write(&temp, body).await {
            Ok(()) => tokio::fs::rename(&temp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp.display(), cleanup);
                }
            }
            return Err(FlatgateError::StoreWrite(format!("{}: {}", self.path.display(), e)));
        }
        Ok(())
    }
}
