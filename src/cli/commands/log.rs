use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::open_schedule;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut state = open_schedule(cfg)?;
        LogLogic::print_log(state.repository().conn())?;
    }

    Ok(())
}
