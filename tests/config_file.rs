// tests/config_file.rs
//
// Settings file round-trips and ExportOptions path handling.

use std::fs;
use std::path::{Path, PathBuf};

use maps_scrape::config::file::{load_from, save_to};
use maps_scrape::config::options::{AppOptions, ExportFormat, ExportOptions, FetchMode};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn saved_options_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut opts = AppOptions::default();
    opts.debug = true;
    opts.lookup_email = false;
    opts.fetch.mode = FetchMode::Http;
    opts.fetch.scroll_passes = 5;
    opts.extract.fallback_len = 40;
    opts.export.format = ExportFormat::Txt;
    opts.export.set_path("results/found.txt");

    save_to(&path, &opts).unwrap();
    assert!(path.exists());
    assert_eq!(load_from(&path).unwrap(), opts);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "debug = true\n\n[fetch]\nmode = \"browser\"\n").unwrap();

    let opts = load_from(&path).unwrap();
    let defaults = AppOptions::default();
    assert!(opts.debug);
    assert!(opts.lookup_email);
    assert_eq!(opts.fetch.mode, FetchMode::Browser);
    assert_eq!(opts.fetch.timeout_secs, defaults.fetch.timeout_secs);
    assert_eq!(opts.extract, defaults.extract);
    assert_eq!(opts.export, defaults.export);
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "debug = \"maybe\"").unwrap();
    assert!(load_from(&path).is_err());
    assert!(load_from(&dir.path().join("missing.toml")).is_err());
}

#[test]
fn default_export_path() {
    let export = ExportOptions::default();
    assert_eq!(norm(&export.out_path()), norm(Path::new("out/google_maps_urls.csv")));
}

#[test]
fn extension_follows_format_until_user_picks_one() {
    let mut export = ExportOptions::default();
    export.set_path("runs/today");
    assert_eq!(norm(&export.out_path()), norm(Path::new("runs/today.csv")));

    export.format = ExportFormat::Txt;
    assert_eq!(norm(&export.out_path()), norm(Path::new("runs/today.txt")));

    export.set_path("runs/today.list");
    export.format = ExportFormat::Csv;
    assert_eq!(norm(&export.out_path()), norm(Path::new("runs/today.list")));
}

#[test]
fn directory_hint_keeps_default_file_name() {
    let mut export = ExportOptions::default();
    export.set_path("exports/");
    assert_eq!(norm(export.current_dir()), norm(Path::new("exports")));
    assert_eq!(norm(&export.out_path()), norm(Path::new("exports/google_maps_urls.csv")));

    export.set_path("   ");
    assert_eq!(export, ExportOptions::default());
}
