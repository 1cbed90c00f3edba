use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::open_schedule;
use crate::errors::AppResult;

/// Add a schedule entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        activity,
        category,
        start,
        end,
        month,
    } = cmd
    {
        let mut state = open_schedule(cfg)?;
        AddLogic::apply(
            &mut state,
            activity,
            category,
            start,
            end,
            month.as_deref(),
        )?;
    }

    Ok(())
}
