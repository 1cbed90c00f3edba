use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryChanges};
use crate::core::open_schedule;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        month,
        activity,
        category,
        start,
        end,
    } = cmd
    {
        let changes = EntryChanges {
            month: month.clone(),
            activity: activity.clone(),
            category: category.clone(),
            start: start.clone(),
            end: end.clone(),
        };

        let mut state = open_schedule(cfg)?;
        EditLogic::apply(&mut state, *id, changes)?;
    }

    Ok(())
}
