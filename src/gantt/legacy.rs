//! Compatibility for positional task ids (`task-<n>`).
//!
//! Earlier chart builds numbered bars by their position in the drawn list,
//! so such an id says nothing about which entry it came from. The only
//! way back is the bar's text: the reported task name (or the title of the
//! n-th current bar) is compared with each entry's activity and the first
//! match in entry-list order wins. Two entries with the same activity text
//! always resolve to the earlier one.

use crate::gantt::bar::Bar;
use crate::models::entry::Entry;

const POSITIONAL_PREFIX: &str = "task-";

/// Parse `task-<n>` into its zero-based position.
pub fn parse_positional(raw: &str) -> Option<usize> {
    let digits = raw.trim().strip_prefix(POSITIONAL_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// First entry whose activity equals `name` (surrounding blanks ignored).
pub fn entry_by_activity<'a>(entries: &'a [Entry], name: &str) -> Option<&'a Entry> {
    let wanted = name.trim();
    if wanted.is_empty() {
        return None;
    }
    entries.iter().find(|e| e.activity.trim() == wanted)
}

/// Resolve a positional id to an entry id.
pub fn resolve_positional(
    raw: &str,
    task_name: Option<&str>,
    bars: &[Bar],
    entries: &[Entry],
) -> Option<i64> {
    let position = parse_positional(raw)?;

    let name = match task_name {
        Some(n) if !n.trim().is_empty() => n,
        _ => bars.get(position)?.title.as_str(),
    };

    entry_by_activity(entries, name).map(|e| e.id)
}
