//! Schedule-to-chart mapping.
//!
//! - `mapper`: entries → bars (forward)
//! - `resolve`: edit gestures → entry updates (reverse)
//! - `legacy`: positional task ids, kept apart from the main path
//! - `session`: keeps bars in step with the state, owns the self-update flag
//! - `render`: terminal drawing of a bar list

pub mod bar;
pub mod legacy;
pub mod mapper;
pub mod render;
pub mod resolve;
pub mod session;
pub mod suppression;

pub use bar::{Bar, BarId};
pub use mapper::{Diagnostic, MapOptions, Mapping, map_entries};
pub use resolve::EditGesture;
pub use session::{ChartOptions, ChartSession, SyncOutcome};
