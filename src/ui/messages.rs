//! Console messages with icons and colors.

use crate::errors::{AppError, ErrorClass};
use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Print a non-fatal failure. Chart edits that could not be resolved are
/// warnings (the chart simply stays as it was); everything else is an
/// error line.
pub fn report(err: &AppError) {
    match err.class() {
        ErrorClass::MappingAmbiguity => warning(format!("{err} (chart left unchanged)")),
        ErrorClass::NotFound => error(format!("{err}.")),
        ErrorClass::Transport => error(format!("{err}. Nothing was changed; try again.")),
        ErrorClass::Validation | ErrorClass::Other => error(err),
    }
}
