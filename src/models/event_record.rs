use super::event_field::EventField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One parsed poster.
///
/// Every text field is always present, possibly empty. `date` stays the
/// free-form string the extractor (or the user) wrote: it is never converted
/// to a calendar type here, see `core::chrono_key` for ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub title: String,
    pub date: String,     // free-form, e.g. "15 Marzo 2026"
    pub time: String,     // "HH:MM" or ""
    pub location: String, // city / area
    pub venue: String,    // hall, theatre, ...
    pub address: String,  // "Via Roma 12"
    pub description: String,
    pub image_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_on: Option<String>, // YYYY-MM-DD, set by the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,

    /// Keys written by other tools, kept so that load → save is lossless.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventRecord {
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::Date => &self.date,
            EventField::Time => &self.time,
            EventField::Location => &self.location,
            EventField::Venue => &self.venue,
            EventField::Address => &self.address,
            EventField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: EventField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EventField::Title => self.title = value,
            EventField::Date => self.date = value,
            EventField::Time => self.time = value,
            EventField::Location => self.location = value,
            EventField::Venue => self.venue = value,
            EventField::Address => self.address = value,
            EventField::Description => self.description = value,
        }
    }

    /// Text the record was (roughly) built from: date/location header line,
    /// then title and description. Used to re-run the extractor on edited data.
    pub fn reconstructed_text(&self) -> String {
        let mut header = self.date.clone();
        if !self.location.is_empty() {
            header.push_str(" – ");
            header.push_str(&self.location);
        }

        // The address goes before the time anchor, otherwise it would be
        // swallowed by the venue on the next extraction.
        let mut body = vec![
            self.title.clone(),
            self.description.clone(),
            self.address.clone(),
        ];
        if !self.time.is_empty() {
            body.push(format!("ore {}", self.time));
            if !self.venue.is_empty() {
                body.push(format!("– {}", self.venue));
            }
        }

        let body = body
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        format!("{}\n{}", header, body)
    }
}
