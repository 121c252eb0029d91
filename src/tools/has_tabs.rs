use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;

use crate::checks::{has_tabs, HAS_TABS_EXIT_CODE};

#[derive(Parser, Debug, Clone)]
pub struct HasTabsOpt {
    /// The file to check
    pub file: PathBuf,

    /// Message printed to stderr if the file contains tabs
    pub message: String,
}

pub fn main_has_tabs(opt: HasTabsOpt) -> Result<(), Error> {
    if has_tabs(&opt.file)? {
        debug!("{} contains tabs", opt.file.display());
        eprintln!("{}", opt.message);
        std::process::exit(HAS_TABS_EXIT_CODE);
    }
    Ok(())
}
