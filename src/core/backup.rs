use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::absolute_target;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally as a zip archive.
    /// Returns the path of the file that was written, or `None` when the
    /// user declined to overwrite an existing file.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = absolute_target(dest_file, "backup file")?;

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask
        if dest.exists()
            && !confirm(&format!("The file '{}' already exists. Overwrite?", dest.display()))?
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        // 4️⃣ Copy database
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            compressed
        } else {
            dest
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src) {
            ttlog_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

/// Compress a backup into `<name>.zip` next to it.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "cronograma.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
