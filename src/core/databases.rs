use crate::core::errors::FlatgateError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATABASE_EXTENSION: &str = ".json";

static DATABASE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static pattern"));

pub fn is_valid_database_name(name: &str) -> bool {
    DATABASE_NAME.is_match(name)
}

/// Read-only access to the JSON documents in the data directory.
#[derive(Clone, Debug)]
pub struct DatabaseBrowser {
    data_dir: PathBuf,
}

impl DatabaseBrowser {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        DatabaseBrowser {
            data_dir: data_dir.into(),
        }
    }

    /// Names of the regular `*.json` files directly inside the data directory,
    /// extension stripped, in directory enumeration order.
    ///
    /// Names are not filtered by the [`read_database`](Self::read_database)
    /// pattern, so a file like `my db.json` is listed but cannot be read.
    pub async fn list_databases(&self) -> Result<Vec<String>, FlatgateError> {
        let mut entries = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_error(&self.data_dir, e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| read_error(&self.data_dir, e))? {
            let file_type = entry.file_type().await.map_err(|e| read_error(&entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let name = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(DATABASE_EXTENSION))
                .filter(|n| !n.is_empty());
            if let Some(name) = name {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Parses `<data_dir>/<name>.json` and returns it as-is.
    pub async fn read_database(&self, name: &str) -> Result<Value, FlatgateError> {
        if !is_valid_database_name(name) {
            return Err(FlatgateError::InvalidDatabaseName(name.to_string()));
        }

        let path = self.data_dir.join(format!("{}{}", name, DATABASE_EXTENSION));
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FlatgateError::DatabaseNotFound(name.to_string()));
            }
            Err(e) => return Err(read_error(&path, e)),
        };
        debug!("Read database {} ({} bytes)", name, raw.len());

        serde_json::from_str(&raw).map_err(|e| FlatgateError::DatabaseRead(format!("{}: {}", path.display(), e)))
    }
}

fn read_error(path: &Path, e: std::io::Error) -> FlatgateError {
    FlatgateError::DatabaseRead(format!("{}: {}", path.display(), e))
}
