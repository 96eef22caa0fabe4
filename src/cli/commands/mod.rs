pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod extract;
pub mod import;
pub mod init;
pub mod list;
pub mod sort;

use crate::config::Config;
use crate::core::extract::Extractor;
use crate::core::import::open_or_seed;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event_field::EventField;
use crate::models::event_record::EventRecord;
use crate::utils::colors::{colorize_optional, highlight};

pub(crate) fn extractor(cfg: &Config) -> Extractor {
    Extractor::new(cfg.extract_options())
}

/// Open the configured collection, seeding it on first run.
pub(crate) fn open_store(cfg: &Config) -> AppResult<EventStore> {
    let uploads = cfg.uploads_path();
    open_or_seed(
        &extractor(cfg),
        &cfg.data_path(),
        &cfg.seed_path(),
        &uploads.to_string_lossy().replace('\\', "/"),
    )
}

/// 1-based position from the CLI → 0-based index.
pub(crate) fn to_index(position: usize, len: usize) -> AppResult<usize> {
    if position == 0 || position > len {
        return Err(AppError::InvalidIndex {
            index: position,
            len,
        });
    }
    Ok(position - 1)
}

/// Human-readable dump of every field.
pub(crate) fn print_record(rec: &EventRecord) {
    for field in EventField::ALL {
        println!(
            "  {:<12} {}",
            highlight(field.label()),
            colorize_optional(rec.get(field))
        );
    }
    if !rec.image_path.is_empty() {
        println!("  {:<12} {}", highlight("Immagine"), rec.image_path);
    }
}
