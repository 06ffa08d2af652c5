pub mod admin_gate;
pub mod credentials;
pub mod databases;
pub mod errors;
pub mod models;
pub mod services;
