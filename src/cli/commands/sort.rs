use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Persist the chronological order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    if store.is_empty() {
        info("No events saved.");
        return Ok(());
    }

    store.sort_chronologically();
    store.save()?;
    success(format!("{} events sorted by date", store.len()));
    Ok(())
}
