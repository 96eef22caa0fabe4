mod common;
use common::{POSTER, data_file, loc, read_records, write_text};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_data_file_and_folders() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(fs::read_to_string(&data).unwrap().trim(), "[]");
    assert!(dir.path().join("uploads").is_dir());
    assert!(dir.path().join("output").is_dir());
    // test mode never writes a config file
    assert!(!dir.path().join("locandine.conf").exists());
}

#[test]
fn test_extract_prints_fields_without_saving() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    let poster = write_text(dir.path(), "poster.txt", POSTER);

    loc(dir.path(), &data)
        .arg("extract")
        .arg(&poster)
        .assert()
        .success()
        .stdout(contains("15 Marzo 2026"))
        .stdout(contains("Sala Grande"))
        .stdout(contains("Not saved"));

    assert!(!data.exists());
}

#[test]
fn test_extract_json_from_stdin() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    let out = loc(dir.path(), &data)
        .args(["extract", "--json"])
        .write_stdin(POSTER)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rec: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(rec["date"], "15 Marzo 2026");
    assert_eq!(rec["location"], "Comune di Test");
    assert_eq!(rec["time"], "20:30");
    assert_eq!(rec["venue"], "Sala Grande");
    assert_eq!(rec["address"], "");
}

#[test]
fn test_extract_save_with_corrections() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    let poster = write_text(dir.path(), "poster.txt", POSTER);

    loc(dir.path(), &data)
        .arg("extract")
        .arg(&poster)
        .args(["--save", "--title", "Concerto", "--image", "uploads\\p1.jpg"])
        .assert()
        .success()
        .stdout(contains("saved at position 1"));

    let records = read_records(&data);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Concerto");
    assert_eq!(records[0].venue, "Sala Grande");
    assert_eq!(records[0].image_path, "uploads/p1.jpg");
    assert_eq!(records[0].is_new, Some(true));
}

#[test]
fn test_add_list_edit_del() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .args(["add", "--title", "Marzo", "--date", "15 Marzo 2026"])
        .assert()
        .success();
    loc(dir.path(), &data)
        .args(["add", "--title", "Senza data"])
        .assert()
        .success();
    loc(dir.path(), &data)
        .args(["add", "--title", "Febbraio", "--date", "20 Febbraio 2026"])
        .assert()
        .success();

    // list is chronological, positions are the stored ones
    let out = loc(dir.path(), &data)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listed: Vec<Value> = serde_json::from_slice(&out).unwrap();
    let order: Vec<(u64, &str)> = listed
        .iter()
        .map(|e| (e["position"].as_u64().unwrap(), e["title"].as_str().unwrap()))
        .collect();
    assert_eq!(order, vec![(3, "Febbraio"), (1, "Marzo"), (2, "Senza data")]);
    assert_eq!(listed[0]["sort_date"], "2026-02-20");
    assert_eq!(listed[2]["sort_date"], Value::Null);

    loc(dir.path(), &data)
        .args(["edit", "2", "--venue", "Sala Rossa", "--time", "21:00"])
        .assert()
        .success()
        .stdout(contains("Event #2 updated"));

    loc(dir.path(), &data)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(contains("Sala Rossa"))
        .stdout(contains("21:00"));

    loc(dir.path(), &data)
        .args(["del", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted #1: Marzo"));

    let titles: Vec<String> = read_records(&data).into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Senza data", "Febbraio"]);
}

#[test]
fn test_list_table_output() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .args(["add", "--title", "Festa", "--date", "1 Maggio 2026", "--location", "Bari"])
        .assert()
        .success();

    loc(dir.path(), &data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1 events, soonest first"))
        .stdout(contains("Ordine"))
        .stdout(contains("Giorno").not())
        .stdout(contains("2026-05-01"))
        .stdout(contains("Bari"));
}

#[test]
fn test_list_empty_collection() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No events saved."));
}

#[test]
fn test_invalid_position_fails() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .args(["add", "--title", "Solo"])
        .assert()
        .success();

    for args in [vec!["show", "0"], vec!["del", "5"], vec!["edit", "2", "--title", "x"]] {
        loc(dir.path(), &data)
            .args(&args)
            .assert()
            .failure()
            .stderr(contains("No event at position"));
    }

    assert_eq!(read_records(&data).len(), 1);
}

#[test]
fn test_edit_without_fields_warns() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .args(["add", "--title", "Solo"])
        .assert()
        .success();

    loc(dir.path(), &data)
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(contains("Nothing to change"));
}

#[test]
fn test_sort_persists_chronological_order() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    fs::write(
        &data,
        json!([
            {"title": "senza data", "date": ""},
            {"title": "marzo", "date": "15/03/2026"},
            {"title": "febbraio", "date": "20 Febbraio 2026"}
        ])
        .to_string(),
    )
    .unwrap();

    loc(dir.path(), &data)
        .arg("sort")
        .assert()
        .success()
        .stdout(contains("3 events sorted"));

    let titles: Vec<String> = read_records(&data).into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["febbraio", "marzo", "senza data"]);
}

#[test]
fn test_import_command() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    let dump = write_text(
        dir.path(),
        "dump.json",
        &json!([
            {"text": POSTER, "image_file": "a.jpg"},
            {"text": "3 Aprile – Napoli", "image_file": "b.jpg"}
        ])
        .to_string(),
    );

    loc(dir.path(), &data)
        .arg("import")
        .arg(&dump)
        .args(["--base-dir", "foto"])
        .assert()
        .success()
        .stdout(contains("2 events imported"));

    let records = read_records(&data);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].image_path, "foto/a.jpg");
    assert_eq!(records[1].title, "3 Aprile 2026 – Napoli");
}

#[test]
fn test_init_then_list_seeds_from_dump() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    write_text(
        dir.path(),
        "locandine.json",
        &json!([{"text": POSTER, "image_file": "a.jpg"}]).to_string(),
    );

    loc(dir.path(), &data).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&data).unwrap().trim(), "[]");

    loc(dir.path(), &data)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(contains("Sala Grande"));

    assert_eq!(read_records(&data).len(), 1);
}

#[test]
fn test_extract_description_override_renews_title() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    let out = loc(dir.path(), &data)
        .args(["extract", "--json", "--description", "Concerto jazz"])
        .write_stdin(POSTER)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rec: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(rec["description"], "Concerto jazz");
    assert_eq!(rec["title"], "Concerto jazz...");
}

#[test]
fn test_first_run_seeds_from_dump() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    write_text(
        dir.path(),
        "locandine.json",
        &json!([{"text": POSTER, "image_file": "a.jpg"}]).to_string(),
    );

    loc(dir.path(), &data)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(contains("Sala Grande"));

    let records = read_records(&data);
    assert_eq!(records.len(), 1);
    assert!(records[0].image_path.ends_with("uploads/a.jpg"));

    // reset empties the collection and the seed is not applied again
    loc(dir.path(), &data)
        .args(["reset", "--force"])
        .assert()
        .success();
    loc(dir.path(), &data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No events saved."));
}

#[test]
fn test_reset_can_be_cancelled() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .args(["add", "--title", "Solo"])
        .assert()
        .success();

    loc(dir.path(), &data)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(read_records(&data).len(), 1);
}

#[test]
fn test_export_json_and_csv() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    fs::write(
        &data,
        json!([
            {"title": "marzo", "date": "15 Marzo 2026"},
            {"title": "febbraio", "date": "20 Febbraio 2026", "venue": "Sala, Grande"}
        ])
        .to_string(),
    )
    .unwrap();

    let json_out = dir.path().join("events.json");
    loc(dir.path(), &data)
        .arg("export")
        .args(["--format", "json", "--file"])
        .arg(&json_out)
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let exported: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(exported[0]["title"], "febbraio");
    assert_eq!(exported[1]["title"], "marzo");

    let csv_out = dir.path().join("events.csv");
    loc(dir.path(), &data)
        .arg("export")
        .args(["--format", "csv", "--file"])
        .arg(&csv_out)
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("position,sort_date,date,time,title"));
    assert!(lines.next().unwrap().starts_with("2,2026-02-20,20 Febbraio 2026,,febbraio"));
    assert!(csv.contains("\"Sala, Grande\""));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    fs::write(&data, json!([{"title": "x", "date": ""}]).to_string()).unwrap();
    let out = write_text(dir.path(), "events.json", "keep me");

    loc(dir.path(), &data)
        .arg("export")
        .arg("--file")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    loc(dir.path(), &data)
        .arg("export")
        .arg("--file")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_backup_and_restore_commands() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    let uploads = dir.path().join("uploads");
    fs::create_dir_all(&uploads).unwrap();
    write_text(&uploads, "a.jpg", "img");

    loc(dir.path(), &data)
        .args(["add", "--title", "Da salvare", "--image", "uploads/a.jpg"])
        .assert()
        .success();

    let archive = dir.path().join("backup.zip");
    loc(dir.path(), &data)
        .arg("backup")
        .arg("--file")
        .arg(&archive)
        .assert()
        .success()
        .stdout(contains("Backup created"))
        .stdout(contains("2 files"));

    loc(dir.path(), &data)
        .args(["reset", "-f"])
        .assert()
        .success();
    fs::remove_file(uploads.join("a.jpg")).unwrap();

    loc(dir.path(), &data)
        .arg("restore")
        .arg(&archive)
        .assert()
        .success()
        .stdout(contains("1 events"));

    assert_eq!(read_records(&data)[0].title, "Da salvare");
    assert!(uploads.join("a.jpg").is_file());
}

#[test]
fn test_restore_json_merges() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());
    let export = write_text(
        dir.path(),
        "old.JSON",
        &json!([{"title": "Vecchio", "date": "1 Gennaio 2026"}]).to_string(),
    );

    loc(dir.path(), &data)
        .args(["add", "--title", "Nuovo"])
        .assert()
        .success();

    loc(dir.path(), &data)
        .arg("restore")
        .arg(&export)
        .assert()
        .success()
        .stdout(contains("1 events merged"));

    let titles: Vec<String> = read_records(&data).into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Nuovo", "Vecchio"]);
}

#[test]
fn test_config_print_in_test_mode() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_year"))
        .stdout(contains("Nuovo Evento"));
}

#[test]
fn test_unknown_command_fails() {
    let dir = tempdir().unwrap();
    let data = data_file(dir.path());

    loc(dir.path(), &data)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("unrecognized subcommand").or(contains("error")));
}
