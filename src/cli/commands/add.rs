use crate::cli::commands::{open_store, print_record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pending::PendingEdit;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Manual entry: the fields come from the command line, no extraction.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { image, fields } = cmd {
        let mut pending = PendingEdit::blank();
        pending.apply_overrides(&fields.overrides());
        if let Some(img) = image {
            pending.set_image(img.replace('\\', "/"));
        }

        let mut store = open_store(cfg)?;
        let idx = pending.commit(&mut store, &cfg.placeholder_title);
        store.save()?;

        if let Ok(rec) = store.get(idx) {
            print_record(rec);
        }
        success(format!("Event added at position {}", idx + 1));
    }

    Ok(())
}
