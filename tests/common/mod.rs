#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn setup() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_nanos()
        .is_test(true)
        .try_init();
}

/// Run `autograde-tools` with the provided arguments, waiting for it to exit.
pub fn tools<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_autograde-tools"))
        .args(args)
        .output()
        .expect("Failed to run autograde-tools")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Create a directory named `name` inside `base` with an empty directory for each entry.
pub fn submission_dir(base: &Path, name: &str, entries: &[&str]) -> PathBuf {
    let dir = base.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    for entry in entries {
        std::fs::create_dir(dir.join(entry)).unwrap();
    }
    dir
}

pub fn tempdir() -> TempDir {
    TempDir::new().unwrap()
}
