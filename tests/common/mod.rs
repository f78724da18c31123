//! Common test utilities

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build an `mk` command isolated from the user's home and config
pub fn mk_command(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("MK_CONFIG")
        .env_remove("MK_URL_SCHEME")
        .env_remove("MK_PASTEBOARD")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a file inside the temporary directory, creating parent directories
pub fn write_file(temp_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Path of a file inside the temporary directory, as displayed by mk
pub fn display_path(temp_dir: &TempDir, relative: &str) -> String {
    temp_dir.path().join(relative).display().to_string()
}
