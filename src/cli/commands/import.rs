use crate::cli::commands::{extractor, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::import_file;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, base_dir } = cmd {
        let base = match base_dir {
            Some(d) => d.clone(),
            None => cfg.uploads_path().to_string_lossy().to_string(),
        };

        let mut store = open_store(cfg)?;
        let count = import_file(
            &extractor(cfg),
            &mut store,
            Path::new(file),
            &base.replace('\\', "/"),
        )?;

        if count == 0 {
            warning(format!("No entries found in {}", file));
            return Ok(());
        }

        store.save()?;
        success(format!("{} events imported from {}", count, file));
    }

    Ok(())
}
