use crate::db::queries::{count_entries, insert_entry};
use crate::errors::AppResult;
use crate::models::entry::EntryDraft;
use rusqlite::Connection;

/// Activities of the 2025 innovation calendar, one row per (month, activity).
const INITIAL_ENTRIES: [(&str, &str, &str, &str, &str); 19] = [
    ("Janeiro", "Levantamento de nomes dos embaixadores", "Planejamento", "2025-01-01", "2025-01-31"),
    ("Fevereiro", "Capacitação de Embaixadores", "Capacitação", "2025-02-01", "2025-03-31"),
    ("Março", "Capacitação de Embaixadores", "Capacitação", "2025-02-01", "2025-03-31"),
    ("Fevereiro", "Campanhas de ideias", "Capacitação", "2025-02-01", "2025-04-30"),
    ("Março", "Campanhas de ideias", "Capacitação", "2025-02-01", "2025-04-30"),
    ("Abril", "Campanhas de ideias", "Capacitação", "2025-02-01", "2025-04-30"),
    ("Abril", "Inova + Saúde", "Inovação", "2025-04-01", "2025-05-31"),
    ("Maio", "Inova + Saúde", "Inovação", "2025-04-01", "2025-05-31"),
    ("Abril", "Jornada da Inovação", "Inovação", "2025-04-01", "2025-04-30"),
    ("Maio", "Acelera", "Inovação", "2025-05-01", "2025-05-31"),
    ("Junho", "Impulsione", "Inovação", "2025-06-01", "2025-07-31"),
    ("Julho", "Impulsione", "Inovação", "2025-06-01", "2025-07-31"),
    ("Junho", "SW", "Inovação", "2025-06-01", "2025-06-30"),
    ("Julho", "Simpósio", "Inovação", "2025-07-01", "2025-07-31"),
    ("Agosto", "Piloto Impulsione", "Projeto Piloto", "2025-08-01", "2025-10-31"),
    ("Setembro", "Piloto Impulsione", "Projeto Piloto", "2025-08-01", "2025-10-31"),
    ("Outubro", "Piloto Impulsione", "Projeto Piloto", "2025-08-01", "2025-10-31"),
    ("Novembro", "Oscar da Inovação", "Evento", "2025-11-01", "2025-11-30"),
    ("Dezembro", "Anúncio da Inovação", "Evento", "2025-12-01", "2025-12-31"),
];

/// Insert the initial calendar when the table is empty.
/// Returns the number of inserted rows (0 when data already exists).
pub fn seed_initial_entries(conn: &Connection) -> AppResult<usize> {
    let existing = count_entries(conn)?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    for (month, activity, category, start, end) in INITIAL_ENTRIES {
        insert_entry(&tx, &EntryDraft::new(month, activity, category, start, end))?;
    }
    tx.commit()?;

    Ok(INITIAL_ENTRIES.len())
}
