#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn pw() -> Command {
    cargo_bin_cmd!("pestwatch")
}

/// Create a unique test storage path inside the system temp dir and remove
/// any existing file
pub fn setup_test_storage(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pestwatch.sqlite", name));
    let storage_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&storage_path).ok();
    storage_path
}

/// Open a test storage file directly through the library API
pub fn open_test_storage(name: &str) -> pestwatch::storage::pool::Storage {
    let path = setup_test_storage(name);
    pestwatch::storage::pool::Storage::open(&path).expect("open storage")
}
