//! Chart session: keeps the drawn bars in step with the schedule state and
//! feeds edit gestures back into it.

use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::gantt::bar::{Bar, BarId};
use crate::gantt::mapper::{DEFAULT_LABEL_WIDTH, Diagnostic, MapOptions, map_entries, map_entry};
use crate::gantt::resolve::{EditGesture, build_update, resolve_target};
use crate::gantt::suppression::{DEFAULT_SETTLE_DELAY, SelfUpdate};
use crate::models::entry::Entry;
use crate::state::ScheduleState;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub label_width: usize,
    pub settle_delay: Duration,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The state has not changed since the last sync.
    Unchanged,
    /// Bars were rebuilt from the current entry list.
    Rebuilt,
    /// Rebuilt, and there is nothing to draw.
    NoData,
    /// The change was this session's own edit; the edited bar was patched
    /// in place.
    Absorbed,
    /// Someone else changed the list during a self-update; the rebuild
    /// happens on the first sync after the flag clears.
    Deferred,
}

pub struct ChartSession {
    options: ChartOptions,
    bars: Vec<Bar>,
    diagnostics: Vec<Diagnostic>,
    self_update: SelfUpdate,
    seen_revision: Option<u64>,
    own_revision: Option<u64>,
    own_entry: Option<Entry>,
    needs_rebuild: bool,
    rebuilds: u64,
}

impl ChartSession {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            bars: Vec::new(),
            diagnostics: Vec::new(),
            self_update: SelfUpdate::Idle,
            seen_revision: None,
            own_revision: None,
            own_entry: None,
            needs_rebuild: false,
            rebuilds: 0,
        }
    }

    /// Last known-good bars.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Entries skipped by the last rebuild.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn is_suppressing(&mut self, now: Instant) -> bool {
        self.self_update.is_active(now)
    }

    /// Bring the bars up to date with `state`.
    pub fn sync<R: EntryRepository>(&mut self, state: &ScheduleState<R>, now: Instant) -> SyncOutcome {
        let revision = state.revision();
        if self.seen_revision == Some(revision) {
            return SyncOutcome::Unchanged;
        }

        if self.self_update.is_active(now) {
            if self.own_revision == Some(revision) {
                self.absorb_own_update();
                if !self.needs_rebuild {
                    self.seen_revision = Some(revision);
                }
                return SyncOutcome::Absorbed;
            }
            return SyncOutcome::Deferred;
        }

        self.rebuild(state.entries());
        self.seen_revision = Some(revision);
        if self.bars.is_empty() {
            SyncOutcome::NoData
        } else {
            SyncOutcome::Rebuilt
        }
    }

    /// Fetch the list from the store, then sync.
    pub fn refresh<R: EntryRepository>(
        &mut self,
        state: &mut ScheduleState<R>,
        now: Instant,
    ) -> AppResult<SyncOutcome> {
        state.fetch()?;
        Ok(self.sync(state, now))
    }

    /// Apply a drag / resize reported by the chart.
    ///
    /// On success the stored entry is returned and the session's own
    /// refresh is absorbed. On any failure nothing is submitted (or the
    /// store rejected it), the flag is dropped and the bars stay as they
    /// were.
    pub fn apply_edit<R: EntryRepository>(
        &mut self,
        state: &mut ScheduleState<R>,
        gesture: &EditGesture,
        now: Instant,
    ) -> AppResult<Entry> {
        if self.self_update.is_in_flight() {
            return Err(AppError::EditInFlight);
        }

        let behind = self.seen_revision != Some(state.revision());
        let target = resolve_target(gesture, &self.bars, state.entries())?;
        let id = target.id;
        let draft = build_update(target, gesture.start, gesture.end)?;

        self.self_update.begin();
        match state.edit(id, &draft) {
            Ok(stored) => {
                self.own_revision = Some(state.revision());
                self.own_entry = Some(stored.clone());
                self.needs_rebuild |= behind;
                self.sync(state, now);
                self.self_update.settle(now, self.options.settle_delay);
                Ok(stored)
            }
            Err(e) => {
                self.self_update.clear();
                self.own_revision = None;
                self.own_entry = None;
                Err(e)
            }
        }
    }

    fn map_options(&self) -> MapOptions {
        MapOptions {
            label_width: self.options.label_width,
        }
    }

    fn rebuild(&mut self, entries: &[Entry]) {
        let mapping = map_entries(entries, &self.map_options());
        self.bars = mapping.bars;
        self.diagnostics = mapping.diagnostics;
        self.needs_rebuild = false;
        self.own_entry = None;
        self.rebuilds += 1;
    }

    fn absorb_own_update(&mut self) {
        let Some(entry) = self.own_entry.take() else {
            return;
        };
        let Ok(bar) = map_entry(&entry, &self.map_options()) else {
            return;
        };

        let id = BarId::Entry(entry.id);
        if let Some(slot) = self.bars.iter_mut().find(|b| b.bar_id == id) {
            *slot = bar;
        } else {
            self.bars.push(bar);
        }
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}
