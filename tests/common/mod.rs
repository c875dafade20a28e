//! Shared helpers for integration tests

use std::io::Write;
use tempfile::TempDir;

/// Write `contents` to a `config.yaml` inside a fresh temp dir.
///
/// Returns the temp dir (keep it alive for the test's duration) and the
/// path to the config file.
#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.yaml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    file.write_all(contents.as_bytes()).expect("write config");
    let path_str = path.to_string_lossy().to_string();
    (dir, path_str)
}
