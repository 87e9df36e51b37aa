use std::path::{Path, PathBuf};

/// Directory holding the database file, relative to the working directory.
pub const DATA_DIR: &str = "data";

/// Database file name inside [`DATA_DIR`].
pub const DB_FILE: &str = "contacts.db";

/// Port used when the `PORT` environment variable is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3001;

pub fn default_database_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(DB_FILE)
}

pub fn database_path_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR).join(DB_FILE)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
