use crate::cli::commands::{open_store, print_record, to_index};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chrono_key::sort_key_at;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use chrono::Local;
use serde::Serialize;

#[derive(Serialize)]
struct ListedEvent<'a> {
    position: usize,
    sort_date: Option<String>,
    #[serde(flatten)]
    event: &'a crate::models::event_record::EventRecord,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::List { json } => list(cfg, *json),
        Commands::Show { position } => show(cfg, *position),
        _ => Ok(()),
    }
}

fn list(cfg: &Config, json: bool) -> AppResult<()> {
    let store = open_store(cfg)?;
    let today = Local::now().date_naive();

    if store.is_empty() {
        if json {
            println!("[]");
        } else {
            info("No events saved.");
        }
        return Ok(());
    }

    let view = store.sorted_view_at(today);

    if json {
        let listed: Vec<ListedEvent> = view
            .iter()
            .map(|(i, e)| ListedEvent {
                position: i + 1,
                sort_date: sort_key_at(e, today)
                    .date()
                    .map(|d| d.format("%Y-%m-%d").to_string()),
                event: e,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    header(format!("{} events, soonest first", store.len()));

    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("Data", 22),
        Column::new("Ordine", 10),
        Column::new("Ora", 5),
        Column::new("Luogo", 18),
        Column::new("Titolo", 40),
    ]);

    for (i, e) in &view {
        let day = sort_key_at(e, today)
            .date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "n/d".to_string());

        table.add_row(vec![
            (i + 1).to_string(),
            e.date.clone(),
            day,
            e.time.clone(),
            e.location.clone(),
            e.title.clone(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

fn show(cfg: &Config, position: usize) -> AppResult<()> {
    let store = open_store(cfg)?;
    let idx = to_index(position, store.len())?;
    let rec = store.get(idx)?;

    header(format!("Event #{}", position));
    print_record(rec);
    if let Some(added) = &rec.added_on {
        println!("  added on {}", added);
    }
    Ok(())
}
