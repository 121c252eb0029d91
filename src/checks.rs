//! Checks on the files submitted by the students.
//!
//! The command line tools follow the convention of the grading scripts: exit code `0` and no
//! output when the check passes, exit code `4` and a message on stderr when it fails.

use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use crate::canonical::split_lines;

/// Exit code of `has-tabs` when the file contains a tab.
pub const HAS_TABS_EXIT_CODE: i32 = 4;
/// Exit code of `has-long-lines` when the file contains a line that is too long.
pub const HAS_LONG_LINES_EXIT_CODE: i32 = 4;

/// Whether the file contains at least a tab character.
pub fn has_tabs<P: AsRef<Path>>(path: P) -> Result<bool, anyhow::Error> {
    let path = path.as_ref();
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.contains(&b'\t'))
}

/// A line longer than the allowed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongLine {
    /// 1-based index of the line.
    pub line: usize,
    /// Number of characters in the line, excluding the newline.
    pub length: usize,
}

/// Find all the lines of the file that have more than `max_len` characters, not counting the
/// line terminator (`\n`, `\r\n` or `\r`).
pub fn long_lines<P: AsRef<Path>>(
    path: P,
    max_len: usize,
) -> Result<Vec<LongLine>, anyhow::Error> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(split_lines(&content)
        .into_iter()
        .enumerate()
        .map(|(index, line)| LongLine {
            line: index + 1,
            length: line.chars().count(),
        })
        .filter(|line| line.length > max_len)
        .collect())
}

/// Why a file is not valid JSON.
#[derive(Error, Debug)]
pub enum JsonCheckError {
    #[error("Cannot read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Exception parsing file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Check that the file contains a single valid JSON value.
pub fn check_json<P: AsRef<Path>>(path: P) -> Result<(), JsonCheckError> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| JsonCheckError::Read {
        path: path.into(),
        source,
    })?;
    serde_json::from_slice::<serde_json::Value>(&content).map_err(|source| {
        JsonCheckError::Parse {
            path: path.into(),
            source,
        }
    })?;
    Ok(())
}
