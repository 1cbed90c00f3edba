// src/export/model.rs

use crate::models::entry::Entry;
use serde::Serialize;

/// Flat record for CSV / JSON export. Field names follow the store columns.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub mes: String,
    pub atividade: String,
    pub categoria: String,
    pub inicio: String,
    pub fim: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            mes: e.month.clone(),
            atividade: e.activity.clone(),
            categoria: e.category.clone(),
            inicio: e.start.clone(),
            fim: e.end.clone(),
        }
    }
}
