use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::open_schedule;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut state = open_schedule(cfg)?;

        // Fails with NotFound before anything is asked.
        let entry = DeleteLogic::preview(&mut state, *id)?;

        if !*force {
            let prompt = format!(
                "Delete entry #{} '{}' ({} → {})? This action is irreversible.",
                entry.id, entry.activity, entry.start, entry.end
            );
            if !confirm(&prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(&mut state, *id)?;
    }

    Ok(())
}
