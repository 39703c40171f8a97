// Rust guideline compliant 2026-10-19

//! Integration tests for CLI commands.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wordbook_app::{AppError, ClearOutcome, ErrorCode, Removal};
use wordbook_cli::commands::{self, list::ListOptions};
use wordbook_cli::create_formatter;
use wordbook_core::{CsvColumns, EntryStore, JsonlStore, Subject};

fn init(temp: &TempDir) -> &Path {
    let formatter = create_formatter("plain", false);
    commands::init::execute(Some(temp.path()), formatter.as_ref()).expect("init");
    temp.path()
}

fn store(root: &Path) -> JsonlStore {
    JsonlStore::new(root.join(".wordbook").join("entries.jsonl")).expect("store")
}

fn app_error(err: &anyhow::Error) -> &AppError {
    err.downcast_ref::<AppError>().expect("app error")
}

#[test]
fn test_init_creates_correct_structure() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let data_dir = root.join(".wordbook");

    assert!(data_dir.join("entries.jsonl").exists());
    let config = fs::read_to_string(data_dir.join("config.toml")).expect("config");
    assert!(config.contains("quiz_max_questions"));
    assert_eq!(
        fs::read_to_string(data_dir.join("entries.jsonl")).expect("entries"),
        ""
    );
}

#[test]
fn test_commands_require_init() {
    let temp = TempDir::new().expect("temp dir");
    let formatter = create_formatter("plain", false);

    let err = commands::add::execute(
        Some(temp.path()),
        "cat",
        "a pet",
        Subject::Noun,
        formatter.as_ref(),
    )
    .unwrap_err();
    assert_eq!(app_error(&err).code(), ErrorCode::NotInitialized);
}

#[test]
fn test_add_persists_entry() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);

    let entry = commands::add::execute(
        Some(root),
        "run",
        "to move fast",
        Subject::IntransitiveVerb,
        formatter.as_ref(),
    )
    .expect("add");

    let all = store(root).get_all().expect("load");
    assert_eq!(all, vec![entry]);

    let err = commands::add::execute(Some(root), "", "x", Subject::Noun, formatter.as_ref())
        .unwrap_err();
    assert_eq!(app_error(&err).code(), ErrorCode::ValidationError);
    assert_eq!(store(root).get_all().expect("load").len(), 1);
}

#[test]
fn test_edit_keeps_unspecified_fields() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    let entry =
        commands::add::execute(Some(root), "cat", "a pet", Subject::Noun, formatter.as_ref())
            .expect("add");

    let edited = commands::edit::execute(
        Some(root),
        entry.id,
        None,
        Some("a small feline".to_string()),
        None,
        formatter.as_ref(),
    )
    .expect("edit");
    assert_eq!(edited.text, "cat");
    assert_eq!(edited.meaning, "a small feline");
    assert_eq!(edited.subject, Subject::Noun);

    let err = commands::edit::execute(Some(root), entry.id, None, None, None, formatter.as_ref())
        .unwrap_err();
    assert_eq!(app_error(&err).code(), ErrorCode::InvalidInput);

    let err = commands::edit::execute(
        Some(root),
        999,
        Some("dog".to_string()),
        None,
        None,
        formatter.as_ref(),
    )
    .unwrap_err();
    assert_eq!(app_error(&err).code(), ErrorCode::NotFound);
}

#[test]
fn test_toggle_flips_checked() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    let entry =
        commands::add::execute(Some(root), "cat", "a pet", Subject::Noun, formatter.as_ref())
            .expect("add");

    assert!(commands::toggle::execute(Some(root), entry.id, formatter.as_ref())
        .expect("toggle")
        .checked);
    assert!(store(root).get(entry.id).expect("get").checked);
}

#[test]
fn test_remove_with_confirmation() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    let entry =
        commands::add::execute(Some(root), "cat", "a pet", Subject::Noun, formatter.as_ref())
            .expect("add");

    let declined =
        commands::remove::execute_with(Some(root), entry.id, |_| false, formatter.as_ref())
            .expect("remove");
    assert_eq!(declined, Removal::Declined);
    assert_eq!(store(root).get_all().expect("load").len(), 1);

    let removed = commands::remove::execute(Some(root), entry.id, true, formatter.as_ref())
        .expect("remove");
    assert!(matches!(removed, Removal::Removed { .. }));
    assert!(store(root).get_all().expect("load").is_empty());

    let again = commands::remove::execute(Some(root), entry.id, true, formatter.as_ref())
        .expect("removing a gone entry is not an error");
    assert_eq!(again, Removal::Missing { id: entry.id });
}

#[test]
fn test_clear_reports_nothing_to_clear() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    commands::add::execute(Some(root), "cat", "a pet", Subject::Noun, formatter.as_ref())
        .expect("add");

    let outcome = commands::clear::execute(Some(root), true, formatter.as_ref()).expect("clear");
    assert_eq!(outcome, None);
    assert_eq!(store(root).get_all().expect("load").len(), 1);
}

#[test]
fn test_clear_removes_checked_entries() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    let first =
        commands::add::execute(Some(root), "cat", "a pet", Subject::Noun, formatter.as_ref())
            .expect("add");
    let second =
        commands::add::execute(Some(root), "dog", "a pet", Subject::Noun, formatter.as_ref())
            .expect("add");
    commands::toggle::execute(Some(root), first.id, formatter.as_ref()).expect("toggle");

    let mut asked = 0;
    let outcome = commands::clear::execute_with(
        Some(root),
        |count| {
            asked = count;
            true
        },
        formatter.as_ref(),
    )
    .expect("clear");
    assert_eq!(asked, 1);
    assert_eq!(outcome, Some(ClearOutcome::Cleared { count: 1 }));

    let remaining = store(root).get_all().expect("load");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[test]
fn test_list_orders_and_filters() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    for (text, subject) in [
        ("cherry", Subject::Noun),
        ("apple", Subject::Noun),
        ("run", Subject::IntransitiveVerb),
    ] {
        commands::add::execute(Some(root), text, "meaning", subject, formatter.as_ref())
            .expect("add");
    }

    let all = commands::list::execute(Some(root), &ListOptions::default(), formatter.as_ref())
        .expect("list");
    let texts: Vec<&str> = all.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["apple", "cherry", "run"]);

    let options = ListOptions {
        filters: vec![Subject::Noun],
        descending: true,
        ..ListOptions::default()
    };
    let nouns = commands::list::execute(Some(root), &options, formatter.as_ref()).expect("list");
    let texts: Vec<&str> = nouns.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["cherry", "apple"]);
}

#[test]
fn test_export_then_import_round_trip() {
    let source = TempDir::new().expect("temp dir");
    let root = init(&source);
    let formatter = create_formatter("plain", false);
    let entry = commands::add::execute(
        Some(root),
        "cat",
        "a pet, feline",
        Subject::Noun,
        formatter.as_ref(),
    )
    .expect("add");
    commands::toggle::execute(Some(root), entry.id, formatter.as_ref()).expect("toggle");

    let path = commands::export::execute(Some(root), None, None, formatter.as_ref())
        .expect("export");
    let name = path.file_name().and_then(|n| n.to_str()).expect("name");
    assert!(name.starts_with("wordbook-") && name.ends_with(".csv"));

    let bytes = fs::read(&path).expect("read export");
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8(bytes).expect("utf8");
    assert!(text.contains("cat,\"a pet, feline\",noun,true\r\n"));

    let target = TempDir::new().expect("temp dir");
    let target_root = init(&target);
    let report = commands::import::execute(Some(target_root), &path, formatter.as_ref())
        .expect("import");
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 0);

    let imported = store(target_root).get_all().expect("load");
    assert_eq!(imported[0].text, "cat");
    assert_eq!(imported[0].meaning, "a pet, feline");
    assert_eq!(imported[0].subject, Subject::Noun);
    assert!(imported[0].checked);
}

#[test]
fn test_export_basic_columns_to_explicit_path() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    commands::add::execute(Some(root), "cat", "a pet", Subject::Noun, formatter.as_ref())
        .expect("add");

    let out = temp.path().join("out.csv");
    let path = commands::export::execute(
        Some(root),
        Some(out.clone()),
        Some(CsvColumns::Basic),
        formatter.as_ref(),
    )
    .expect("export");
    assert_eq!(path, out);
    assert_eq!(
        fs::read_to_string(&out).expect("read"),
        "\u{feff}word,meaning\r\ncat,a pet\r\n"
    );
}

#[test]
fn test_import_reports_skipped_rows() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    let csv = temp.path().join("in.csv");
    fs::write(
        &csv,
        "word,meaning,subject,checked\nrun,to move fast,i-verb,false\n,orphan,noun,false\nblue,a colour,colour,yes\n",
    )
    .expect("write csv");

    let report =
        commands::import::execute(Some(root), &csv, formatter.as_ref()).expect("import");
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 1);

    let entries = store(root).get_all().expect("load");
    let blue = entries.iter().find(|e| e.text == "blue").expect("blue");
    assert_eq!(blue.subject, Subject::Noun);
    assert!(!blue.checked);
}

#[test]
fn test_import_missing_file() {
    let temp = TempDir::new().expect("temp dir");
    let root = init(&temp);
    let formatter = create_formatter("plain", false);
    let err = commands::import::execute(Some(root), &temp.path().join("nope.csv"), formatter.as_ref())
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}
