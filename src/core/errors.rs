use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlatgateError {
    /// Email or password missing from a request
    #[error("Email and password are required")]
    MissingFields,

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Email is already registered (case-insensitive)
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Supplied admin word did not match
    #[error("Forbidden")]
    Forbidden,

    /// Database name contains characters outside `[A-Za-z0-9_-]`
    #[error("Invalid database name: {0:?}")]
    InvalidDatabaseName(String),

    #[error("Database {0} not found")]
    DatabaseNotFound(String),

    #[error("Database read error: {0}")]
    DatabaseRead(String),

    #[error("Store read error: {0}")]
    StoreRead(String),

    #[error("Store write error: {0}")]
    StoreWrite(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
