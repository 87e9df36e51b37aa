//! Contact entity - the single row type persisted by the store.

use serde::{Deserialize, Serialize};

/// A contact in the store.
///
/// The `id` is assigned by the storage layer at insert time and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Opaque unique identifier, generated server-side
    pub id: String,
    /// Display name, never empty for a stored row
    pub name: String,
    /// Phone number, never empty for a stored row
    pub phone: String,
    /// Email address, may be empty
    pub email: String,
}
