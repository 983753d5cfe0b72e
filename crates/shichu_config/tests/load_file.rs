//! Loading config files from disk.

use std::path::PathBuf;

use shichu_config::{ConfigError, load_config, resolve_config};

fn write_temp(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("shichu_config_{}_{name}", std::process::id()));
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn loads_file_from_disk() {
    let path = write_temp(
        "ok.toml",
        "[options]\nuseHistoricalDST = true\n\n[thresholds]\nextremeStrong = 70.0\n",
    );
    let c = load_config(&path).unwrap();
    assert!(c.options.use_historical_dst);
    assert_eq!(c.thresholds.extreme_strong, 70.0);
    std::fs::remove_file(&path).ok();
}

#[test]
fn resolve_with_explicit_path() {
    let path = write_temp("explicit.toml", "[options]\nuseLocalTime = false\n");
    let c = resolve_config(Some(&path)).unwrap();
    assert!(!c.options.use_local_time);
    std::fs::remove_file(&path).ok();
}

#[test]
fn parse_error_names_file() {
    let path = write_temp("bad.toml", "[options\n");
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { path: Some(_), .. }));
    assert!(err.to_string().contains("bad.toml"));
    std::fs::remove_file(&path).ok();
}
