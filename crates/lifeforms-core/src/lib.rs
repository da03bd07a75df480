//! Core types and trait definitions for the Wonderful Life Forms catalog.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! The SQLite backend and the terminal front end both depend on it.

pub mod catalog;
pub mod error;
pub mod grid;
pub mod record;
pub mod store;

pub use error::{Error, Result};
