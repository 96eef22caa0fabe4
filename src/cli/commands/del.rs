use crate::cli::commands::{open_store, to_index};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { position } = cmd {
        let mut store = open_store(cfg)?;
        let idx = to_index(*position, store.len())?;
        let removed = store.remove(idx)?;
        store.save()?;

        success(format!("🗑️  Deleted #{}: {}", position, removed.title));
    }

    Ok(())
}
