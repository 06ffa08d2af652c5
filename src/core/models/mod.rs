pub mod user;

pub use user::{Identity, User};
