use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;

use crate::checks::{long_lines, HAS_LONG_LINES_EXIT_CODE};

#[derive(Parser, Debug, Clone)]
pub struct HasLongLinesOpt {
    /// The file to check
    pub file: PathBuf,

    /// Maximum number of characters allowed in a line, excluding the newline
    pub max_len: usize,

    /// Message printed to stderr if the file contains long lines
    pub message: String,
}

pub fn main_has_long_lines(opt: HasLongLinesOpt) -> Result<(), Error> {
    let long = long_lines(&opt.file, opt.max_len)?;
    if long.is_empty() {
        return Ok(());
    }
    for line in &long {
        debug!(
            "{}:{} has {} characters (max {})",
            opt.file.display(),
            line.line,
            line.length,
            opt.max_len
        );
    }
    eprintln!("{}", opt.message);
    std::process::exit(HAS_LONG_LINES_EXIT_CODE);
}
