use crate::core::extract::{Extractor, apply_default_title, title_from_description};
use crate::core::store::EventStore;
use crate::models::event_field::EventField;
use crate::models::event_record::EventRecord;
use chrono::{Local, NaiveDate};

/// An extracted record waiting for human confirmation.
///
/// The caller owns it: build it from OCR text, correct the fields, then
/// `commit` it into a store or simply drop it to discard the extraction.
#[derive(Debug, Clone)]
pub struct PendingEdit {
    source_text: String,
    record: EventRecord,
    // title still derived from the description, not typed by the user
    auto_title: bool,
}

impl PendingEdit {
    pub fn from_text(extractor: &Extractor, raw_text: &str) -> Self {
        Self {
            source_text: raw_text.to_string(),
            record: extractor.extract(raw_text),
            auto_title: true,
        }
    }

    /// Manual entry: no OCR text, the user types every field.
    pub fn blank() -> Self {
        Self {
            source_text: String::new(),
            record: EventRecord::default(),
            auto_title: true,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    /// Set one field. A new description also renews the title, as long as
    /// the user has not typed a title of their own.
    pub fn set(&mut self, field: EventField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EventField::Title => self.auto_title = false,
            EventField::Description if self.auto_title => {
                // empty → filled with the placeholder on commit
                self.record.title = title_from_description(&value).unwrap_or_default();
            }
            _ => {}
        }
        self.record.set(field, value);
    }

    /// Apply user corrections. Later entries win over earlier ones.
    pub fn apply_overrides(&mut self, overrides: &[(EventField, String)]) {
        for (field, value) in overrides {
            self.set(*field, value.as_str());
        }
    }

    pub fn set_image(&mut self, image_path: impl Into<String>) {
        self.record.image_path = image_path.into();
    }

    /// Finalize the record: default title, bookkeeping metadata.
    pub fn into_record(self, placeholder_title: &str, today: NaiveDate) -> EventRecord {
        let mut rec = self.record;
        apply_default_title(&mut rec, placeholder_title);
        rec.added_on = Some(today.format("%Y-%m-%d").to_string());
        rec.is_new = Some(true);
        rec
    }

    /// Append to the store (not saved). Returns the new position.
    pub fn commit(self, store: &mut EventStore, placeholder_title: &str) -> usize {
        let today = Local::now().date_naive();
        store.push(self.into_record(placeholder_title, today))
    }
}
