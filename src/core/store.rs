use crate::core::chrono_key::{self, SortKey};
use crate::errors::{AppError, AppResult};
use crate::models::event_field::EventField;
use crate::models::event_record::EventRecord;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The event collection, persisted wholesale as a JSON array.
///
/// Records are addressed by position (0-based). Order on disk is whatever
/// the last `save` wrote; chronological order is applied explicitly with
/// `sort_chronologically` or viewed with `sorted_view`.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: Vec<EventRecord>,
}

impl EventStore {
    /// Load the collection. A missing or blank file is an empty collection.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let events = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = events.len(), "event store loaded");
        Ok(Self { path, events })
    }

    /// In-memory store bound to `path`, ignoring whatever is on disk.
    pub fn with_events(path: impl AsRef<Path>, events: Vec<EventRecord>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            events,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the collection back as pretty-printed UTF-8 JSON.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.events)?;
        fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), count = self.events.len(), "event store saved");
        Ok(())
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> AppResult<&EventRecord> {
        let len = self.events.len();
        self.events
            .get(index)
            .ok_or(AppError::InvalidIndex { index, len })
    }

    fn get_mut(&mut self, index: usize) -> AppResult<&mut EventRecord> {
        let len = self.events.len();
        self.events
            .get_mut(index)
            .ok_or(AppError::InvalidIndex { index, len })
    }

    /// Append a record, returning its position.
    pub fn push(&mut self, record: EventRecord) -> usize {
        self.events.push(record);
        self.events.len() - 1
    }

    pub fn update(&mut self, index: usize, field: EventField, value: &str) -> AppResult<()> {
        self.get_mut(index)?.set(field, value);
        Ok(())
    }

    /// Apply several field updates at once; nothing changes if `index` is invalid.
    pub fn update_fields(&mut self, index: usize, changes: &[(EventField, String)]) -> AppResult<()> {
        let rec = self.get_mut(index)?;
        for (field, value) in changes {
            rec.set(*field, value.as_str());
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> AppResult<EventRecord> {
        let len = self.events.len();
        if index >= len {
            return Err(AppError::InvalidIndex { index, len });
        }
        Ok(self.events.remove(index))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Reorder the collection itself, soonest first. Stable.
    pub fn sort_chronologically(&mut self) {
        self.sort_chronologically_at(Local::now().date_naive());
    }

    pub fn sort_chronologically_at(&mut self, today: NaiveDate) {
        chrono_key::sort_events_at(&mut self.events, today);
    }

    /// Chronological view without touching the stored order.
    pub fn sorted_view(&self) -> Vec<(usize, &EventRecord)> {
        self.sorted_view_at(Local::now().date_naive())
    }

    pub fn sorted_view_at(&self, today: NaiveDate) -> Vec<(usize, &EventRecord)> {
        chrono_key::sorted_indices(&self.events, today)
            .into_iter()
            .map(|i| (i, &self.events[i]))
            .collect()
    }

    /// Sort keys of the records, in stored order.
    pub fn sort_keys_at(&self, today: NaiveDate) -> Vec<SortKey> {
        self.events
            .iter()
            .map(|e| chrono_key::sort_key_at(e, today))
            .collect()
    }

    /// Append entries that are already processed records (they carry a
    /// `title` key). Anything else is skipped. Returns how many were added.
    pub fn merge_processed(&mut self, entries: Vec<Value>) -> AppResult<usize> {
        let mut added = 0;
        for entry in entries {
            if entry.get("title").is_none() {
                continue;
            }
            let record: EventRecord = serde_json::from_value(entry)?;
            self.events.push(record);
            added += 1;
        }
        Ok(added)
    }
}
