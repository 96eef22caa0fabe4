// src/export/model.rs

use crate::core::chrono_key::SortKey;
use crate::models::event_record::EventRecord;
use serde::Serialize;

/// Flat row for CSV export, one per event in chronological order.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub position: usize,   // 1-based position in the stored collection
    pub sort_date: String, // YYYY-MM-DD, empty when the date is unreadable
    pub date: String,
    pub time: String,
    pub title: String,
    pub location: String,
    pub venue: String,
    pub address: String,
    pub description: String,
    pub image_path: String,
}

impl EventExport {
    pub fn from_record(index: usize, key: SortKey, e: &EventRecord) -> Self {
        Self {
            position: index + 1,
            sort_date: key
                .date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            date: e.date.clone(),
            time: e.time.clone(),
            title: e.title.clone(),
            location: e.location.clone(),
            venue: e.venue.clone(),
            address: e.address.clone(),
            description: e.description.clone(),
            image_path: e.image_path.clone(),
        }
    }
}
