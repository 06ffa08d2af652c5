pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use config::Config;
pub use crate::core::errors::FlatgateError;
pub use crate::core::services::FlatgateService;
pub use infrastructure::storage::{RecordStore, in_memory::InMemoryStore, json_file::JsonFileStore};

#[cfg(test)]
mod tests;
