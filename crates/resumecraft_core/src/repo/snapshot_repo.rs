//! Key-value snapshot repository and SQLite implementation.
//!
//! # Responsibility
//! - Store one serialized JSON value per key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Keys are trimmed and non-empty.
//! - `revision` starts at 1 and increases on every overwrite of a key.
//! - Values are stored verbatim; decoding is the caller's concern.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot repository error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Key is blank after trimming.
    EmptyKey,
    /// Connection has not been migrated to the expected schema.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Persisted row cannot be decoded.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EmptyKey => write!(f, "snapshot key must not be empty"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One stored snapshot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub key: String,
    /// Serialized JSON text.
    pub value: String,
    pub revision: i64,
    /// Epoch ms of the last write.
    pub updated_at: i64,
}

/// Persistent key-value store for document snapshots.
pub trait SnapshotRepository {
    /// Inserts or overwrites `key`; returns the new revision.
    fn put(&self, key: &str, value: &str) -> RepoResult<i64>;
    fn get(&self, key: &str) -> RepoResult<Option<StoredSnapshot>>;
    /// Removes `key`; returns whether a row existed.
    fn delete(&self, key: &str) -> RepoResult<bool>;
    /// Stored keys in ascending order.
    fn keys(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// Rejects connections that were not migrated to the latest schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn put(&self, key: &str, value: &str) -> RepoResult<i64> {
        let key = normalize_key(key)?;
        let revision = self.conn.query_row(
            "INSERT INTO kv_snapshots (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                revision = kv_snapshots.revision + 1,
                updated_at = (strftime('%s', 'now') * 1000)
             RETURNING revision;",
            params![key, value],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(revision)
    }

    fn get(&self, key: &str) -> RepoResult<Option<StoredSnapshot>> {
        let key = normalize_key(key)?;
        let snapshot = self
            .conn
            .query_row(
                "SELECT key, value, revision, updated_at
                 FROM kv_snapshots
                 WHERE key = ?1;",
                [key],
                parse_snapshot_row,
            )
            .optional()?;

        if let Some(snapshot) = &snapshot {
            if snapshot.revision < 1 {
                return Err(RepoError::InvalidData(format!(
                    "revision `{}` for key `{}` must be >= 1",
                    snapshot.revision, snapshot.key
                )));
            }
        }
        Ok(snapshot)
    }

    fn delete(&self, key: &str) -> RepoResult<bool> {
        let key = normalize_key(key)?;
        let changed = self
            .conn
            .execute("DELETE FROM kv_snapshots WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_snapshots ORDER BY key ASC;")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for key in rows {
            keys.push(key?);
        }
        Ok(keys)
    }
}

fn parse_snapshot_row(row: &Row<'_>) -> rusqlite::Result<StoredSnapshot> {
    Ok(StoredSnapshot {
        key: row.get("key")?,
        value: row.get("value")?,
        revision: row.get("revision")?,
        updated_at: row.get("updated_at")?,
    })
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::EmptyKey);
    }
    Ok(trimmed)
}
