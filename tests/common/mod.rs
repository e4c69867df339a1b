//! Shared utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` to a uniquely named file in the temp directory.
pub fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "trie-router-{}-{}.toml",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

/// Remove a file created by [`write_temp_config`].
pub fn cleanup(path: &Path) {
    fs::remove_file(path).unwrap_or_default();
}
