use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        year,
    } = cmd
    {
        let path = Config::config_file();

        // ---- SET DEFAULT YEAR ----
        if let Some(y) = year {
            if !(1900..=2200).contains(y) {
                return Err(AppError::Config(format!("implausible year: {}", y)));
            }
            let mut updated = cfg.clone();
            updated.default_year = *y;
            updated.save()?;
            success(format!("Default year set to {}", y));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                warning("No configuration file yet: run `locandine init` first.");
                return Ok(());
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let edited = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false);

            if edited {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
            } else if editor_to_use != default_editor {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if !status.success() {
                    return Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        default_editor, status
                    )));
                }
            } else {
                return Err(AppError::Config(format!(
                    "failed to run editor '{}'",
                    editor_to_use
                )));
            }
        }
    }

    Ok(())
}
