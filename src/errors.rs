//! Unified application error type.
//! Store access, state actions, the Gantt mapper and the CLI all return
//! AppError so failures can be reported the same way everywhere.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / store (transport)
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("Entry #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Gantt edit gestures
    // ---------------------------
    #[error("Cannot resolve chart task '{0}' to a schedule entry")]
    UnresolvedTask(String),

    #[error("Another chart edit is still being saved")]
    EditInFlight,

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

/// Coarse error families, used to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rejected before reaching the store.
    Validation,
    /// Id absent on lookup, replace or delete.
    NotFound,
    /// Store or filesystem unavailable; state keeps its last good snapshot.
    Transport,
    /// A chart edit could not be traced back to an entry.
    MappingAmbiguity,
    Other,
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Validation(_) | AppError::InvalidDate(_) => ErrorClass::Validation,
            AppError::NotFound(_) => ErrorClass::NotFound,
            AppError::Io(_) | AppError::Db(_) => ErrorClass::Transport,
            AppError::UnresolvedTask(_) | AppError::EditInFlight => ErrorClass::MappingAmbiguity,
            AppError::Config(_) | AppError::Export(_) | AppError::Other(_) => ErrorClass::Other,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
