//! Bulk import of raw OCR dumps (`locandine.json`).
//!
//! Each entry is `{ "text": "...", "image_file": "x.jpg" }`, optionally with
//! `date` and `location` already filled by whoever produced the dump.

use crate::core::extract::Extractor;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event_record::EventRecord;
use chrono::Local;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImportEntry {
    pub text: String,
    pub image_file: String,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// Join the base directory and the image file with a forward slash,
/// whatever the platform.
pub fn image_path(base_dir: &str, image_file: &str) -> String {
    let base = base_dir.trim_end_matches(['/', '\\']);
    if base.is_empty() {
        image_file.to_string()
    } else {
        format!("{}/{}", base, image_file)
    }
}

/// Extract one entry.
///
/// When the extractor could not do better than the placeholder title, the
/// title becomes `"{date} – {location}"` (if both are known).
pub fn parse_json_event(extractor: &Extractor, entry: &ImportEntry, base_dir: &str) -> EventRecord {
    let mut rec = extractor.extract(&entry.text);

    if let Some(date) = entry.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        rec.date = date.to_string();
    }
    if let Some(loc) = entry.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        rec.location = loc.to_string();
    }

    if !entry.image_file.is_empty() {
        rec.image_path = image_path(base_dir, &entry.image_file);
    }

    let placeholder = &extractor.options().placeholder_title;
    if (rec.title.is_empty() || rec.title == *placeholder)
        && !rec.date.is_empty()
        && !rec.location.is_empty()
    {
        rec.title = format!("{} – {}", rec.date, rec.location);
    }

    rec
}

pub fn read_entries(path: &Path) -> AppResult<Vec<ImportEntry>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))
}

/// Import every entry of `path` into `store` (not saved). Returns the count.
pub fn import_file(
    extractor: &Extractor,
    store: &mut EventStore,
    path: &Path,
    base_dir: &str,
) -> AppResult<usize> {
    let entries = read_entries(path)?;
    let added_on = Local::now().format("%Y-%m-%d").to_string();

    for entry in &entries {
        let mut rec = parse_json_event(extractor, entry, base_dir);
        rec.added_on = Some(added_on.clone());
        debug!(title = %rec.title, "imported entry");
        store.push(rec);
    }

    info!(count = entries.len(), file = %path.display(), "bulk import completed");
    Ok(entries.len())
}

/// Marker written next to the data file once the collection has been seeded.
pub fn seed_marker(data_file: &Path) -> PathBuf {
    let mut name = data_file.as_os_str().to_os_string();
    name.push(".seeded");
    PathBuf::from(name)
}

/// Open the collection and, while it is still empty (no data file, a blank
/// one or `[]`, as written by `init`), seed it from the raw dump at `seed`.
///
/// Seeding happens once: the marker from [`seed_marker`] keeps a collection
/// emptied by `reset` empty.
pub fn open_or_seed(
    extractor: &Extractor,
    data_file: &Path,
    seed: &Path,
    base_dir: &str,
) -> AppResult<EventStore> {
    let mut store = EventStore::open(data_file)?;
    let marker = seed_marker(data_file);

    if store.is_empty() && !marker.exists() && seed.is_file() {
        let count = import_file(extractor, &mut store, seed, base_dir)?;
        store.save()?;
        fs::write(&marker, Local::now().format("%Y-%m-%d").to_string())?;
        info!(count, seed = %seed.display(), "collection seeded");
    }

    Ok(store)
}
