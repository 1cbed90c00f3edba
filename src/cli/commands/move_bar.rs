use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartLogic;
use crate::core::open_schedule;
use crate::errors::AppResult;
use crate::gantt::render::RenderOptions;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move {
        task_id,
        start,
        end,
        name,
    } = cmd
    {
        let render = RenderOptions {
            width: cfg.chart_width,
            color: false,
        };

        let mut state = open_schedule(cfg)?;
        ChartLogic::move_bar(
            &mut state,
            cfg,
            task_id,
            start,
            end,
            name.as_deref(),
            &render,
        )?;
    }

    Ok(())
}
