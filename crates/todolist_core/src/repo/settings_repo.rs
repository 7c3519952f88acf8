//! Persistent application flags.
//!
//! # Responsibility
//! - Store small key/value settings next to the to-do data.
//!
//! # Invariants
//! - Boolean flags are stored as `"1"` / `"0"`; anything else is invalid data.

use crate::repo::category_repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Set once the user has gone through the onboarding screen.
pub const FIRST_LAUNCH_KEY: &str = "first_launch_done";

pub trait SettingsRepository {
    fn get_bool(&self, key: &str) -> RepoResult<Option<bool>>;
    fn set_bool(&self, key: &str, value: bool) -> RepoResult<()>;
}

pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get_bool(&self, key: &str) -> RepoResult<Option<bool>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        match value.as_deref() {
            None => Ok(None),
            Some("1") => Ok(Some(true)),
            Some("0") => Ok(Some(false)),
            Some(other) => Err(RepoError::InvalidData(format!(
                "invalid boolean `{other}` for settings key `{key}`"
            ))),
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, if value { "1" } else { "0" }],
        )?;
        Ok(())
    }
}
