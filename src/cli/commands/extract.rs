use crate::cli::commands::{extractor, open_store, print_record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pending::PendingEdit;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use std::fs;
use std::io;

/// Run the extractor on OCR text, show the result and optionally save it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Extract {
        file,
        image,
        json,
        save,
        fields,
    } = cmd
    {
        //
        // 1. Read the OCR text
        //
        let text = match file.as_deref() {
            None | Some("-") => io::read_to_string(io::stdin())?,
            Some(path) => fs::read_to_string(path)?,
        };

        //
        // 2. Extract + user corrections
        //
        let mut pending = PendingEdit::from_text(&extractor(cfg), &text);
        pending.apply_overrides(&fields.overrides());
        if let Some(img) = image {
            pending.set_image(img.replace('\\', "/"));
        }

        //
        // 3. Show
        //
        if *json {
            println!("{}", serde_json::to_string_pretty(pending.record())?);
        } else {
            header("Extracted event");
            print_record(pending.record());
        }

        //
        // 4. Commit
        //
        if *save {
            let mut store = open_store(cfg)?;
            let idx = pending.commit(&mut store, &cfg.placeholder_title);
            store.save()?;
            success(format!("Event saved at position {}", idx + 1));
        } else if !*json {
            info("Not saved: check the fields, then re-run with --save (and --title/--date/... to correct them).");
        }
    }

    Ok(())
}
