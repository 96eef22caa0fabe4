// src/export/logic.rs

use crate::core::chrono_key;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Hand-off of the collection to whoever renders it (Word, print, ...).
pub struct ExportLogic;

impl ExportLogic {
    /// Export the events in chronological order.
    ///
    /// - `format`: json | csv
    /// - `force`: overwrite `path` without asking
    pub fn export(
        store: &EventStore,
        format: ExportFormat,
        path: &Path,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<usize> {
        if store.is_empty() {
            warning("No events to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let view = store.sorted_view_at(today);

        match format {
            ExportFormat::Json => {
                let records: Vec<_> = view.iter().map(|(_, e)| *e).collect();
                export_json(&records, path)?
            }
            ExportFormat::Csv => {
                let rows: Vec<EventExport> = view
                    .iter()
                    .map(|(i, e)| EventExport::from_record(*i, chrono_key::sort_key_at(e, today), e))
                    .collect();
                export_csv(&rows, path)?
            }
        }

        Ok(view.len())
    }
}
