//! Data access layer: CRUD intents over the `cronograma` table.

use crate::db::migrate::run_pending_migrations;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::{Entry, EntryDraft};
use rusqlite::Connection;
use std::path::Path;

/// Storage contract used by the state container.
///
/// Drafts are validated by the implementation before anything is written;
/// returned entries always carry `YYYY-MM-DD` dates when the stored value
/// allows it.
pub trait EntryRepository {
    fn list_entries(&mut self) -> AppResult<Vec<Entry>>;

    fn get_entry(&mut self, id: i64) -> AppResult<Entry>;

    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<Entry>;

    /// Fails with `NotFound` when `id` is absent.
    fn replace_entry(&mut self, id: i64, draft: &EntryDraft) -> AppResult<Entry>;

    /// Fails with `NotFound` when `id` is absent.
    fn delete_entry(&mut self, id: i64) -> AppResult<()>;
}

/// One SQLite connection; the schema is migrated when it is opened.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_connection(Connection::open(Path::new(path))?)
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Raw connection, for the audit log and bulk helpers.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl EntryRepository for SqliteRepository {
    fn list_entries(&mut self) -> AppResult<Vec<Entry>> {
        queries::load_entries(&self.conn)
    }

    fn get_entry(&mut self, id: i64) -> AppResult<Entry> {
        queries::load_entry(&self.conn, id)
    }

    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<Entry> {
        let draft = draft.validated()?;
        queries::insert_entry(&self.conn, &draft)
    }

    fn replace_entry(&mut self, id: i64, draft: &EntryDraft) -> AppResult<Entry> {
        let draft = draft.validated()?;
        queries::update_entry(&self.conn, id, &draft)
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        queries::delete_entry(&self.conn, id)
    }
}
