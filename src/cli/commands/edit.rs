use crate::cli::commands::{open_store, print_record, to_index};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Field-by-field update of a saved event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { position, fields } = cmd {
        let changes = fields.overrides();
        if changes.is_empty() {
            warning("Nothing to change: pass at least one of --title, --date, --time, ...");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        let idx = to_index(*position, store.len())?;
        store.update_fields(idx, &changes)?;
        store.save()?;

        print_record(store.get(idx)?);
        success(format!("Event #{} updated", position));
    }

    Ok(())
}
