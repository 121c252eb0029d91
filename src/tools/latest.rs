use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::Parser;

use autograde_submissions::latest_submission_dirs;

#[derive(Parser, Debug, Clone)]
pub struct LatestOpt {
    /// Directory with the submissions, named <login>.<n>
    pub dir: PathBuf,

    /// Print a JSON array instead of a path per line.
    #[clap(long)]
    pub json: bool,
}

pub fn main_latest(opt: LatestOpt) -> Result<(), Error> {
    let dirs = latest_submission_dirs(&opt.dir)
        .with_context(|| format!("Failed to list the submissions in {}", opt.dir.display()))?;
    if opt.json {
        let dirs: Vec<_> = dirs.collect();
        println!("{}", serde_json::to_string_pretty(&dirs)?);
    } else {
        for dir in dirs {
            println!("{}", dir.display());
        }
    }
    Ok(())
}
