//! In-memory schedule state.
//!
//! `ScheduleState` owns the repository and the last successfully loaded
//! entry list. Every action goes through the same three steps: mark the
//! state as loading, call the store, then either replace the list
//! (fulfilled) or keep the previous one and record the failure (rejected).
//! The entry list is never touched by anything else.

use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Failed(String),
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Fetch,
    Add,
    Edit,
    Remove,
}

impl Action {
    fn failure_message(self) -> &'static str {
        match self {
            Action::Fetch => "Failed to load schedule",
            Action::Add => "Failed to add entry",
            Action::Edit => "Failed to edit entry",
            Action::Remove => "Failed to remove entry",
        }
    }
}

pub struct ScheduleState<R: EntryRepository> {
    repo: R,
    entries: Vec<Entry>,
    status: LoadStatus,
    loaded: bool,
    revision: u64,
}

impl<R: EntryRepository> ScheduleState<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            entries: Vec::new(),
            status: LoadStatus::Idle,
            loaded: false,
            revision: 0,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Bumped once per fulfilled action; lets observers notice list changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn repository(&mut self) -> &mut R {
        &mut self.repo
    }

    /// Release the repository (closing the store when it is dropped).
    pub fn into_repository(self) -> R {
        self.repo
    }

    pub fn clear_error(&mut self) {
        if matches!(self.status, LoadStatus::Failed(_)) {
            self.status = LoadStatus::Idle;
        }
    }

    pub fn find(&self, id: i64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Fetch only when nothing has been loaded yet and nothing is running.
    pub fn ensure_loaded(&mut self) -> AppResult<&[Entry]> {
        if !self.loaded && !self.is_loading() {
            self.fetch()?;
        }
        Ok(&self.entries)
    }

    pub fn fetch(&mut self) -> AppResult<&[Entry]> {
        self.run(Action::Fetch, |_| Ok(()))
    }

    /// Create an entry, then reload the list. Returns the created entry.
    pub fn add(&mut self, draft: &EntryDraft) -> AppResult<Entry> {
        let mut created = None;
        self.run(Action::Add, |repo| {
            created = Some(repo.create_entry(draft)?);
            Ok(())
        })?;
        created.ok_or_else(|| AppError::Other("create returned no entry".into()))
    }

    /// Replace entry `id`, then reload the list. Returns the stored entry.
    pub fn edit(&mut self, id: i64, draft: &EntryDraft) -> AppResult<Entry> {
        let mut updated = None;
        self.run(Action::Edit, |repo| {
            updated = Some(repo.replace_entry(id, draft)?);
            Ok(())
        })?;
        updated.ok_or_else(|| AppError::Other("replace returned no entry".into()))
    }

    pub fn remove(&mut self, id: i64) -> AppResult<()> {
        self.run(Action::Remove, |repo| repo.delete_entry(id))?;
        Ok(())
    }

    fn run<F>(&mut self, action: Action, op: F) -> AppResult<&[Entry]>
    where
        F: FnOnce(&mut R) -> AppResult<()>,
    {
        // pending
        self.status = LoadStatus::Loading;

        let outcome = op(&mut self.repo).and_then(|_| self.repo.list_entries());

        match outcome {
            // fulfilled
            Ok(entries) => {
                self.entries = entries;
                self.loaded = true;
                self.revision += 1;
                self.status = LoadStatus::Idle;
                Ok(&self.entries)
            }
            // rejected: previous list stays
            Err(e) => {
                self.status = LoadStatus::Failed(format!("{}: {e}", action.failure_message()));
                Err(e)
            }
        }
    }
}
