//! Terminal rendering of a bar list. Draws exactly what the bars say:
//! labels, dates and colors are already resolved by the mapper.

use crate::gantt::bar::Bar;
use crate::models::category::Category;
use crate::models::month::month_abbrev;
use crate::utils::formatting::{display_width, pad_right};
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_CHART_WIDTH: usize = 72;
pub const MIN_CHART_WIDTH: usize = 12;
pub const MAX_CHART_WIDTH: usize = 400;
const FILL: char = '█';
const EMPTY: char = '·';

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Number of cells for the time axis, kept within
    /// `MIN_CHART_WIDTH..=MAX_CHART_WIDTH`.
    pub width: usize,
    /// Paint bars with their terminal color.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            color: true,
        }
    }
}

/// Maps calendar days onto chart columns.
struct Axis {
    first: NaiveDate,
    days: i64,
    width: usize,
}

impl Axis {
    fn new(bars: &[Bar], width: usize) -> Option<Self> {
        let first = bars.iter().map(|b| b.start).min()?;
        let last = bars.iter().map(|b| b.end).max()?;
        Some(Self {
            first,
            days: (last - first).num_days() + 1,
            width: width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH),
        })
    }

    fn column(&self, d: NaiveDate) -> usize {
        let offset = (d - self.first).num_days().clamp(0, self.days - 1);
        ((offset as usize) * self.width) / (self.days as usize)
    }

    fn month_starts(&self) -> Vec<NaiveDate> {
        let last = self.first + chrono::Duration::days(self.days - 1);
        let mut out = vec![self.first];
        let mut d = self.first.with_day(1).unwrap_or(self.first);
        loop {
            d = match d.checked_add_months(chrono::Months::new(1)) {
                Some(next) => next,
                None => break,
            };
            if d > last {
                break;
            }
            out.push(d);
        }
        out
    }
}

fn header_line(axis: &Axis) -> String {
    let mut cells = vec![' '; axis.width];
    let mut free_from = 0;

    for m in axis.month_starts() {
        let col = axis.column(m);
        let name = month_abbrev(m);
        let len = name.chars().count();
        if col < free_from || col + len > axis.width {
            continue;
        }
        for (i, ch) in name.chars().enumerate() {
            cells[col + i] = ch;
        }
        free_from = col + len + 1;
    }

    cells.into_iter().collect()
}

fn bar_cells(axis: &Axis, bar: &Bar, color: bool) -> String {
    let from = axis.column(bar.start);
    let to = axis.column(bar.end).max(from);

    let before: String = std::iter::repeat_n(EMPTY, from).collect();
    let filled: String = std::iter::repeat_n(FILL, to - from + 1).collect();
    let after: String = std::iter::repeat_n(EMPTY, axis.width - to - 1).collect();

    let filled = if color {
        bar.color.terminal().paint(filled).to_string()
    } else {
        filled
    };

    format!("{before}{filled}{after}")
}

fn legend(color: bool) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            let swatch = if color {
                c.color().terminal().paint("■").to_string()
            } else {
                "■".to_string()
            };
            format!("{swatch} {}", c.to_db_str())
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Render the chart as a multi-line string. `loaded` is the size of the
/// entry list the bars came from, skipped entries included.
pub fn render_chart(bars: &[Bar], loaded: usize, options: &RenderOptions) -> String {
    let Some(axis) = Axis::new(bars, options.width) else {
        return "No data available\n".to_string();
    };

    let id_w = bars
        .iter()
        .map(|b| b.bar_id.to_string().len())
        .max()
        .unwrap_or(0);
    let label_w = bars.iter().map(|b| display_width(&b.label)).max().unwrap_or(0);
    let gutter = id_w + label_w + 2;

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", " ".repeat(gutter), header_line(&axis)));

    for bar in bars {
        out.push_str(&format!(
            "{} {} │{}│ {} → {}\n",
            pad_right(&bar.bar_id.to_string(), id_w),
            pad_right(&bar.label, label_w),
            bar_cells(&axis, bar, options.color),
            bar.start.format("%d/%m"),
            bar.end.format("%d/%m"),
        ));
    }

    out.push('\n');
    out.push_str(&legend(options.color));
    out.push('\n');
    out.push_str(&format!("{loaded} entries loaded\n"));
    out
}
