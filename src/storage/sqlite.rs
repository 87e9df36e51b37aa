//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use super::schema;
use crate::contact::Contact;
use crate::{Error, Result};

/// Contacts inserted into a brand-new, empty store at startup.
pub const SEED_CONTACTS: &[(&str, &str, &str)] = &[
    ("Ron Levi", "052-1234567", "ron.levi@example.com"),
    ("Marine Azulay", "054-7654321", "marine.azulay@example.com"),
];

/// SQLite-backed storage for contacts
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    ///
    /// WAL mode is enabled so concurrent readers can proceed while a
    /// single write is in flight.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// List all contacts ordered by name
    pub fn list_all(&self) -> Result<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, email FROM contacts ORDER BY name ASC")?;

        let contacts = stmt
            .query_map([], |row| self.row_to_contact(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(contacts)
    }

    /// Get a contact by id
    pub fn get(&self, id: &str) -> Result<Option<Contact>> {
        self.conn
            .query_row(
                "SELECT id, name, phone, email FROM contacts WHERE id = ?1",
                [id],
                |row| self.row_to_contact(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new contact, generating its id
    ///
    /// The stored row is read back so callers observe exactly what the
    /// database holds.
    pub fn insert(&self, name: &str, phone: &str, email: &str) -> Result<Contact> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO contacts (id, name, phone, email) VALUES (?1, ?2, ?3, ?4)",
            params![id, name, phone, email],
        )?;
        self.get(&id)?.ok_or(Error::ContactNotFound(id))
    }

    /// Overwrite name/phone/email for the contact matching `id`
    ///
    /// Returns `None` if no such row exists. The id itself never changes.
    pub fn update(
        &self,
        id: &str,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<Option<Contact>> {
        let changed = self.conn.execute(
            "UPDATE contacts SET name = ?2, phone = ?3, email = ?4 WHERE id = ?1",
            params![id, name, phone, email],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        self.get(id)
    }

    /// Delete the contact matching `id`, returns whether a row was removed
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    /// Count all contacts
    pub fn count(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Seed the store with sample contacts when it is empty
    ///
    /// Returns how many rows were inserted (zero for an already
    /// populated store).
    pub fn seed_if_empty(&self) -> Result<usize> {
        if self.count()? > 0 {
            return Ok(0);
        }
        for (name, phone, email) in SEED_CONTACTS {
            self.insert(name, phone, email)?;
        }
        Ok(SEED_CONTACTS.len())
    }

    /// Helper to convert a row to a Contact
    fn row_to_contact(&self, row: &rusqlite::Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_crud() {
        let store = SqliteStore::open_in_memory().unwrap();

        let contact = store.insert("Ada", "0501111111", "ada@example.com").unwrap();
        assert!(!contact.id.is_empty());
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.phone, "0501111111");
        assert_eq!(contact.email, "ada@example.com");

        let retrieved = store.get(&contact.id).unwrap().unwrap();
        assert_eq!(retrieved, contact);
    }

    #[test]
    fn test_insert_generates_unique_ids() {
        let store = SqliteStore::open_in_memory().unwrap();

        let a = store.insert("Ada", "1", "").unwrap();
        let b = store.insert("Ada", "1", "").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get("does-not-exist").unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_by_name() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.insert("Zed", "1", "").unwrap();
        store.insert("Amy", "2", "").unwrap();

        let contacts = store.list_all().unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Amy");
        assert_eq!(contacts[1].name, "Zed");
    }

    #[test]
    fn test_update_existing() {
        let store = SqliteStore::open_in_memory().unwrap();

        let contact = store.insert("Ada", "1", "").unwrap();
        let updated = store
            .update(&contact.id, "Ada Lovelace", "2", "ada@example.com")
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, contact.id);
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.phone, "2");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();

        let result = store.update("does-not-exist", "Ada", "1", "").unwrap();
        assert!(result.is_none());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_twice() {
        let store = SqliteStore::open_in_memory().unwrap();

        let contact = store.insert("Ada", "1", "").unwrap();
        assert!(store.delete(&contact.id).unwrap());
        assert!(!store.delete(&contact.id).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_seed_if_empty() {
        let store = SqliteStore::open_in_memory().unwrap();

        assert_eq!(store.seed_if_empty().unwrap(), 2);

        let names: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Marine Azulay", "Ron Levi"]);

        // Already populated, second call seeds nothing
        assert_eq!(store.seed_if_empty().unwrap(), 0);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_open_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("contacts.db");

        let id = {
            let store = SqliteStore::open(&db_path).unwrap();
            store.insert("Ada", "1", "").unwrap().id
        };

        let store = SqliteStore::open(&db_path).unwrap();
        let contact = store.get(&id).unwrap().unwrap();
        assert_eq!(contact.name, "Ada");
    }
}
