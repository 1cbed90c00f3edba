//! Self-update flag that holds back chart rebuilds around the chart's own saves.

use std::time::{Duration, Instant};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Self-update flag of a chart session.
///
/// Raised when the session submits its own edit; while raised, list
/// refreshes are not turned into full rebuilds. After a successful save it
/// stays raised for a short settle delay, after a failed one it drops at
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfUpdate {
    #[default]
    Idle,
    InFlight,
    Settling {
        until: Instant,
    },
}

impl SelfUpdate {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SelfUpdate::InFlight)
    }

    /// Whether rebuilds are held back at `now`. Lazily drops an expired
    /// settle window.
    pub fn is_active(&mut self, now: Instant) -> bool {
        match *self {
            SelfUpdate::Idle => false,
            SelfUpdate::InFlight => true,
            SelfUpdate::Settling { until } if now < until => true,
            SelfUpdate::Settling { .. } => {
                *self = SelfUpdate::Idle;
                false
            }
        }
    }

    pub fn begin(&mut self) {
        *self = SelfUpdate::InFlight;
    }

    pub fn settle(&mut self, now: Instant, delay: Duration) {
        *self = SelfUpdate::Settling { until: now + delay };
    }

    pub fn clear(&mut self) {
        *self = SelfUpdate::Idle;
    }
}
