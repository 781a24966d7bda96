pub mod migrations;
pub mod models;
pub mod queries;

use std::path::Path;
use std::sync::Mutex;

use remark_crypto::{CryptoError, FieldCipher};
use rusqlite::Connection;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A single-row delete touched more than one row.
    #[error("delete affected {affected} rows, expected exactly one")]
    IntegrityViolation { affected: usize },

    #[error("unknown comment status code {0}")]
    UnknownStatus(i64),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence for services, users and comments.
///
/// Comment body, author name and website are encrypted before they reach
/// SQLite and decrypted on the way out; plaintext only crosses the public
/// methods of this type.
pub struct Store {
    conn: Mutex<Connection>,
    cipher: FieldCipher,
}

impl Store {
    pub fn open(path: &Path, key: &[u8; 32]) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        let store = Self::init(conn, key)?;

        info!("Database opened at {}", path.display());
        Ok(store)
    }

    pub fn open_in_memory(key: &[u8; 32]) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, key)
    }

    fn init(conn: Connection, key: &[u8; 32]) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::run(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            cipher: FieldCipher::new(key),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&conn)
    }

    /// Like [`Store::with_conn`] but hands out `&mut` so callers can open a
    /// transaction.
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&mut conn)
    }
}
