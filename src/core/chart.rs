use crate::config::Config;
use crate::core::Schedule;
use crate::db::log::{ttlog_entry, ttlog_quiet};
use crate::errors::{AppError, AppResult};
use crate::gantt::mapper::Diagnostic;
use crate::gantt::render::{RenderOptions, render_chart};
use crate::gantt::{ChartSession, EditGesture};
use crate::models::entry::Entry;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{normalize_date, parse_date};
use std::time::Instant;

/// High-level logic behind `gantt` and `move`.
pub struct ChartLogic;

fn log_diagnostics(state: &mut Schedule, diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        warning(d);
        ttlog_entry(
            state.repository().conn(),
            "chart_skip",
            d.entry_id,
            &d.reason.to_string(),
        );
    }
}

fn parse_gesture_date(raw: &str) -> AppResult<chrono::NaiveDate> {
    parse_date(&normalize_date(raw)).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

impl ChartLogic {
    /// Load the schedule and draw it.
    pub fn show(state: &mut Schedule, cfg: &Config, render: &RenderOptions) -> AppResult<()> {
        let mut session = ChartSession::new(cfg.chart_options());
        session.refresh(state, Instant::now())?;

        let diagnostics = session.diagnostics().to_vec();
        log_diagnostics(state, &diagnostics);

        print!(
            "{}",
            render_chart(session.bars(), state.entries().len(), render)
        );
        Ok(())
    }

    /// Apply one drag / resize to the chart and redraw it.
    ///
    /// A rejected gesture leaves both the schedule and the drawn chart as
    /// they were.
    pub fn move_bar(
        state: &mut Schedule,
        cfg: &Config,
        task_id: &str,
        start: &str,
        end: &str,
        name: Option<&str>,
        render: &RenderOptions,
    ) -> AppResult<Entry> {
        let mut session = ChartSession::new(cfg.chart_options());
        session.refresh(state, Instant::now())?;

        let gesture = EditGesture {
            task_id: task_id.to_string(),
            task_name: name.map(str::to_string),
            start: parse_gesture_date(start)?,
            end: parse_gesture_date(end)?,
        };

        match session.apply_edit(state, &gesture, Instant::now()) {
            Ok(entry) => {
                ttlog_entry(
                    state.repository().conn(),
                    "move",
                    entry.id,
                    &format!("{} → {} ({})", entry.start, entry.end, entry.month),
                );
                success(format!(
                    "Entry #{} '{}' moved to {} → {} (month: {}).",
                    entry.id, entry.activity, entry.start, entry.end, entry.month
                ));
                print!(
                    "{}",
                    render_chart(session.bars(), state.entries().len(), render)
                );
                Ok(entry)
            }
            Err(e) => {
                ttlog_quiet(
                    state.repository().conn(),
                    "move_rejected",
                    task_id,
                    &e.to_string(),
                );
                info("Chart left as it was.");
                Err(e)
            }
        }
    }
}
