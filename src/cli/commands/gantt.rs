use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartLogic;
use crate::core::open_schedule;
use crate::errors::AppResult;
use crate::gantt::render::RenderOptions;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gantt { width, no_color } = cmd {
        let render = RenderOptions {
            width: width.map(usize::from).unwrap_or(cfg.chart_width),
            color: !*no_color,
        };

        let mut state = open_schedule(cfg)?;
        ChartLogic::show(&mut state, cfg, &render)?;
    }

    Ok(())
}
