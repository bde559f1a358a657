//! Tests for CLI argument parsing and the binary end to end

use assert_cmd::Command;
use cardport::cli::{Cli, Commands};
use cardport::collection::{Collection, ImportMode, MEDIA_DIR};
use clap::Parser;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_import_default_values() {
    let cli = Cli::parse_from(["cardport", "import", "cards.json"]);
    let Commands::Import(args) = cli.command else {
        panic!("Expected import subcommand");
    };

    assert_eq!(args.input, Some(PathBuf::from("cards.json")));
    assert!(!args.strict, "Default strict should be false");
    assert!(!args.no_confirm, "Default no_confirm should be false");
    assert!(!args.dry_run, "Default dry_run should be false");

    let config = args.resolve_config().unwrap();
    assert_eq!(config.model_name, "Basic-Import");
    assert_eq!(config.import_mode, ImportMode::Update);
}

#[test]
fn test_import_overrides() {
    let cli = Cli::parse_from([
        "cardport",
        "import",
        "cards.json",
        "-c",
        "/tmp/col",
        "--model",
        "Vocab",
        "--mode",
        "ignore",
        "--strict",
    ]);
    let Commands::Import(args) = cli.command else {
        panic!("Expected import subcommand");
    };

    assert_eq!(args.collection_path(), PathBuf::from("/tmp/col"));
    let config = args.resolve_config().unwrap();
    assert_eq!(config.model_name, "Vocab");
    assert_eq!(config.import_mode, ImportMode::Ignore);
    assert!(config.strict);
}

#[test]
fn test_input_is_optional() {
    let cli = Cli::parse_from(["cardport", "import"]);
    let Commands::Import(args) = cli.command else {
        panic!("Expected import subcommand");
    };
    assert!(args.input.is_none());
}

#[test]
fn test_config_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"modelName": "FromFile", "importMode": "duplicate", "imageExtensions": ["PNG"]}"#,
    )
    .unwrap();

    let cli = Cli::parse_from([
        "cardport",
        "import",
        "cards.json",
        "--config",
        config_path.to_str().unwrap(),
        "--mode",
        "update",
    ]);
    let Commands::Import(args) = cli.command else {
        panic!("Expected import subcommand");
    };

    let config = args.resolve_config().unwrap();
    assert_eq!(config.model_name, "FromFile");
    assert_eq!(config.import_mode, ImportMode::Update);
    assert!(config.image_extensions.contains("png"));
    assert!(!config.image_extensions.contains("jpg"));
}

#[test]
fn test_init_fields() {
    let cli = Cli::parse_from(["cardport", "init", "--fields", "Word,Reading,Meaning"]);
    let Commands::Init(args) = cli.command else {
        panic!("Expected init subcommand");
    };

    assert_eq!(args.model, "Basic-Import");
    assert_eq!(args.fields, vec!["Word", "Reading", "Meaning"]);
}

#[test]
fn test_init_default_fields() {
    let cli = Cli::parse_from(["cardport", "init"]);
    let Commands::Init(args) = cli.command else {
        panic!("Expected init subcommand");
    };
    assert_eq!(args.fields, vec!["Front", "Back"]);
}

#[test]
fn test_binary_init_then_import() {
    let temp_dir = TempDir::new().unwrap();
    let collection_dir = temp_dir.path().join("collection");
    write_media(temp_dir.path(), "x.mp3", b"audio");
    let json = write_json(
        temp_dir.path(),
        r#"[{"deck":"A","Front":"hi","Back":"bye"}, {"deck":"B","Front":"x.mp3","Back":""}]"#,
    );

    Command::cargo_bin("cardport")
        .unwrap()
        .args(["init", "-c", collection_dir.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("cardport")
        .unwrap()
        .args([
            "import",
            json.to_str().unwrap(),
            "-c",
            collection_dir.to_str().unwrap(),
            "--no-confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Importing complete."));

    let collection = Collection::open(&collection_dir).unwrap();
    assert_eq!(deck_rows(&collection, "A"), vec![vec!["hi", "bye"]]);
    assert_eq!(deck_rows(&collection, "B"), vec![vec!["[sound:x.mp3]", ""]]);
}

#[test]
fn test_binary_dry_run_leaves_collection_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let collection_dir = temp_dir.path().join("collection");
    let json = write_json(temp_dir.path(), r#"[{"deck":"A","Front":"hi","Back":"bye"}]"#);
    Collection::create(&collection_dir, MODEL_NAME, &basic_fields()).unwrap();

    Command::cargo_bin("cardport")
        .unwrap()
        .args([
            "import",
            json.to_str().unwrap(),
            "-c",
            collection_dir.to_str().unwrap(),
            "--no-confirm",
            "--dry-run",
        ])
        .assert()
        .success();

    let collection = Collection::open(&collection_dir).unwrap();
    assert!(collection.notes().is_empty());
}

#[test]
fn test_binary_dry_run_copies_no_media() {
    let temp_dir = TempDir::new().unwrap();
    let collection_dir = temp_dir.path().join("collection");
    write_media(temp_dir.path(), "x.mp3", b"audio");
    let json = write_json(temp_dir.path(), r#"[{"deck":"A","Front":"x.mp3"}]"#);
    Collection::create(&collection_dir, MODEL_NAME, &basic_fields()).unwrap();

    Command::cargo_bin("cardport")
        .unwrap()
        .args([
            "import",
            json.to_str().unwrap(),
            "-c",
            collection_dir.to_str().unwrap(),
            "--no-confirm",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    let collection = Collection::open(&collection_dir).unwrap();
    assert!(collection.notes().is_empty());
    assert!(!collection_dir.join(MEDIA_DIR).join("x.mp3").exists());
}

#[test]
fn test_binary_reports_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let collection_dir = temp_dir.path().join("collection");
    let json = write_json(temp_dir.path(), "[{");
    Collection::create(&collection_dir, MODEL_NAME, &basic_fields()).unwrap();

    Command::cargo_bin("cardport")
        .unwrap()
        .args([
            "import",
            json.to_str().unwrap(),
            "-c",
            collection_dir.to_str().unwrap(),
            "--no-confirm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"));
}

#[test]
fn test_binary_missing_collection() {
    let temp_dir = TempDir::new().unwrap();
    let json = write_json(temp_dir.path(), "[]");

    Command::cargo_bin("cardport")
        .unwrap()
        .args([
            "import",
            json.to_str().unwrap(),
            "-c",
            temp_dir.path().join("absent").to_str().unwrap(),
            "--no-confirm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cardport init"));
}
