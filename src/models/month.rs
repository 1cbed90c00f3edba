use chrono::{Datelike, NaiveDate};

/// Canonical month labels, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Month label for the calendar month of `date`.
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Short three-letter form used in the chart header.
pub fn month_abbrev(date: NaiveDate) -> String {
    month_label(date).chars().take(3).collect()
}

pub fn is_canonical(label: &str) -> bool {
    MONTH_NAMES.iter().any(|m| m.eq_ignore_ascii_case(label.trim()))
}
