//! Path utilities: expand ~, require absolute output paths.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and reject relative paths. `what` names the file in the
/// error ("output file", "backup file").
pub fn absolute_target(path: &str, what: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Err(AppError::Validation(format!(
            "{what} path must be absolute: {path}"
        )))
    }
}
