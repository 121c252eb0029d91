use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::Parser;

use autograde_submissions::superseded;

#[derive(Parser, Debug, Clone)]
pub struct SupersededOpt {
    /// Directory where the submissions are provided
    pub provide_dir: PathBuf,

    /// Directory with the clones of the submissions
    pub clone_dir: PathBuf,

    /// Produce JSON output.
    #[clap(long, short)]
    pub json: bool,
}

pub fn main_superseded(opt: SupersededOpt) -> Result<(), Error> {
    let report = superseded(&opt.provide_dir, &opt.clone_dir).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            opt.provide_dir.display(),
            opt.clone_dir.display()
        )
    })?;
    if opt.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
