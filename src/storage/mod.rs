//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - contacts(id, name, phone, email)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, SEED_CONTACTS};
