use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::{BackupLogic, default_backup_name};
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Backup { file } => backup(cfg, file.as_deref()),
        Commands::Restore { file } => restore(cfg, Path::new(file)),
        Commands::Reset { force } => reset(cfg, *force),
        _ => Ok(()),
    }
}

fn backup(cfg: &Config, file: Option<&str>) -> AppResult<()> {
    let dest = match file {
        Some(f) => PathBuf::from(f),
        None => cfg.output_path().join(default_backup_name()),
    };

    let count = BackupLogic::create(&cfg.data_path(), &cfg.uploads_path(), &dest)?;
    success(format!("📦 Backup created: {} ({} files)", dest.display(), count));
    Ok(())
}

fn restore(cfg: &Config, file: &Path) -> AppResult<()> {
    let is_json = file
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let mut store = open_store(cfg)?;
        BackupLogic::restore_json(&mut store, file)?;
        store.save()?;
        return Ok(());
    }

    let count = BackupLogic::restore(file, &cfg.data_path(), &cfg.uploads_path())?;
    let store = EventStore::open(cfg.data_path())?;
    success(format!(
        "♻️  Backup restored: {} files, {} events",
        count,
        store.len()
    ));
    Ok(())
}

fn reset(cfg: &Config, force: bool) -> AppResult<()> {
    if !force {
        warning("This deletes every saved event.");
        print!("Continue? [y/N]: ");
        io::stdout().flush().ok();

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si") {
            println!("❌ Reset cancelled by user.");
            return Ok(());
        }
    }

    let mut store = EventStore::open(cfg.data_path())?;
    store.clear();
    store.save()?;
    success("Events database reset");
    Ok(())
}
