use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_schedule;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut state = open_schedule(cfg)?;
        let conn = state.repository().conn();
        let count = ExportLogic::export(conn, *format, file, range.as_deref(), *force)?;

        if count > 0 {
            ttlog_quiet(
                conn,
                "export",
                file,
                &format!("{count} entries as {}", format.as_str()),
            );
        }
    }
    Ok(())
}
