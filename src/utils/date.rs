use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

/// Drop any time-of-day part: "2025-05-01T00:00:00Z" and
/// "2025-05-01 08:00:00" both become "2025-05-01".
pub fn normalize_date(raw: &str) -> String {
    let s = raw.trim();
    match s.find(['T', ' ']) {
        Some(idx) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// True when `s` has the `YYYY-MM-DD` shape (no calendar check).
pub fn has_date_shape(s: &str) -> bool {
    DATE_SHAPE.is_match(s)
}

/// Strict `YYYY-MM-DD` parse: shape first, then a real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `dd/mm/yyyy` for table output; raw text is shown when it doesn't parse.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}
