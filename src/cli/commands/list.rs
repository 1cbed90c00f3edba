use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_schedule;
use crate::errors::AppResult;
use crate::export::range::parse_period;
use crate::models::entry::Entry;
use crate::utils::date::display_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

fn overlaps(e: &Entry, from: NaiveDate, to: NaiveDate) -> bool {
    match (e.start_date(), e.end_date()) {
        (Some(s), Some(f)) => s <= to && f >= from,
        _ => false,
    }
}

pub fn render_entries(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Month", 10),
        Column::new("Activity", 40),
        Column::new("Category", 14),
        Column::new("Start", 10),
        Column::new("End", 10),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.month.clone(),
            e.activity.clone(),
            e.category.clone(),
            display_date(&e.start),
            display_date(&e.end),
        ]);
    }

    table.render()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => None,
        };

        let mut state = open_schedule(cfg)?;
        let entries = state.ensure_loaded()?;

        let shown: Vec<&Entry> = match bounds {
            None => entries.iter().collect(),
            Some((from, to)) => entries.iter().filter(|e| overlaps(e, from, to)).collect(),
        };

        print!("{}", render_entries(&shown));
    }

    Ok(())
}
