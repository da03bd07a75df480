//! SQLite backend for the lifeform catalog.
//!
//! Holds one [`rusqlite::Connection`] for the life of the process. Every
//! operation runs synchronously on the calling thread.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_DB_FILE, SqliteStore};

#[cfg(test)]
mod tests;
