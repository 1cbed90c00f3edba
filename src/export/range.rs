// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

/// Parse a period expression into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// `None` means "everything" (`all`).
pub fn parse_period(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (first, last) = match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(AppError::Validation(
                    "start and end of a range must have the same format".into(),
                ));
            }
            (bounds_of(start)?.0, bounds_of(end)?.1)
        }
        None => bounds_of(r)?,
    };

    if last < first {
        return Err(AppError::Validation(format!(
            "range ends ({last}) before it starts ({first})"
        )));
    }
    Ok(Some((first, last)))
}

/// First and last day covered by a single year / month / day expression.
fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::Validation(format!("unsupported period '{p}'"));

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let d2 = d1
                .checked_add_months(Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
