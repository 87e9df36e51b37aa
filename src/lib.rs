//! # Rolodex - Contact book over HTTP
//!
//! A small CRUD service for contacts, backed by an embedded SQLite store.
//!
//! Rolodex provides:
//! - A single `contacts` table persisted in a local database file
//! - An axum HTTP API for create/read/update/delete
//! - Startup seeding so a brand-new store is never empty

pub mod config;
pub mod contact;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use contact::Contact;
pub use storage::SqliteStore;

/// Result type alias for Rolodex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Rolodex operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}
