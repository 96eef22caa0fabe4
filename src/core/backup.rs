use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use chrono::Local;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

/// Name of the collection file inside the archive.
pub const ARCHIVE_DATA_NAME: &str = "data.json";

/// Folder of the images inside the archive.
pub const ARCHIVE_UPLOADS_DIR: &str = "uploads";

/// `locandine_backup_20260315_2030.zip`
pub fn default_backup_name() -> String {
    format!("locandine_backup_{}.zip", Local::now().format("%Y%m%d_%H%M"))
}

pub struct BackupLogic;

impl BackupLogic {
    /// Zip the collection file and the uploaded images.
    ///
    /// Missing sources are skipped. Returns the number of files archived.
    pub fn create(data_file: &Path, uploads_dir: &Path, dest: &Path) -> AppResult<usize> {
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut count = 0;

        // 1️⃣ collection
        if data_file.exists() {
            zip.start_file(ARCHIVE_DATA_NAME, options)?;
            let mut f = fs::File::open(data_file)?;
            io::copy(&mut f, &mut zip)?;
            count += 1;
        } else {
            warning(format!("Data file not found, skipped: {}", data_file.display()));
        }

        // 2️⃣ images (flat, like the uploads folder)
        if uploads_dir.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(uploads_dir)?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            entries.sort();

            for path in entries {
                let Some(name) = path.file_name() else {
                    continue;
                };
                let arcname = format!("{}/{}", ARCHIVE_UPLOADS_DIR, name.to_string_lossy());
                zip.start_file(arcname, options)?;
                let mut f = fs::File::open(&path)?;
                io::copy(&mut f, &mut zip)?;
                count += 1;
            }
        }

        zip.finish()?;
        debug!(dest = %dest.display(), files = count, "backup archive written");
        Ok(count)
    }

    /// Unpack a backup archive over the current data file and uploads dir.
    ///
    /// Entries other than `data.json` and `uploads/<file>` are ignored, as
    /// is anything whose name would escape the target directory.
    pub fn restore(archive: &Path, data_file: &Path, uploads_dir: &Path) -> AppResult<usize> {
        let file = fs::File::open(archive)?;
        let mut zip = ZipArchive::new(file)?;
        let mut restored = 0;

        for i in 0..zip.len() {
            let mut entry = zip.by_index(i)?;
            if entry.is_dir() {
                continue;
            }

            let Some(name) = entry.enclosed_name() else {
                warning(format!("Skipping unsafe archive entry: {}", entry.name()));
                continue;
            };

            let target = match archive_target(&name, data_file, uploads_dir) {
                Some(t) => t,
                None => {
                    debug!(entry = %name.display(), "ignored archive entry");
                    continue;
                }
            };

            if let Some(parent) = target.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }

            let mut out = fs::File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
            restored += 1;
        }

        if restored == 0 {
            return Err(AppError::Backup(format!(
                "nothing to restore in {}",
                archive.display()
            )));
        }

        Ok(restored)
    }

    /// Merge already-processed records from a plain JSON export.
    pub fn restore_json(store: &mut EventStore, json_file: &Path) -> AppResult<usize> {
        let content = fs::read_to_string(json_file)?;
        let value: Value = serde_json::from_str(&content)?;

        let Value::Array(entries) = value else {
            return Err(AppError::Backup(format!(
                "{} does not contain a list of events",
                json_file.display()
            )));
        };

        let added = store.merge_processed(entries)?;
        info(format!("{} events merged from {}", added, json_file.display()));
        Ok(added)
    }
}

/// Where an archive entry goes on disk, if it is one we restore.
fn archive_target(name: &Path, data_file: &Path, uploads_dir: &Path) -> Option<PathBuf> {
    let parts: Vec<&str> = name
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    match parts.as_slice() {
        [single] if *single == ARCHIVE_DATA_NAME => Some(data_file.to_path_buf()),
        [dir, file] if *dir == ARCHIVE_UPLOADS_DIR => Some(uploads_dir.join(file)),
        _ => None,
    }
}
