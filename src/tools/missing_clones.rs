use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::Parser;

use autograde_submissions::missing_clones;

#[derive(Parser, Debug, Clone)]
pub struct MissingClonesOpt {
    /// Assignment directory with all the submissions, like /comp/11/grading/hw02
    pub source_dir: PathBuf,

    /// Directory containing the clones of the submissions.
    #[clap(long, default_value = ".")]
    pub clone_dir: PathBuf,
}

/// Print the names (`<login>.<n>`) of the latest submissions for which the clone directory has
/// either no submission or an older one.
pub fn main_missing_clones(opt: MissingClonesOpt) -> Result<(), Error> {
    let missing = missing_clones(&opt.source_dir, &opt.clone_dir).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            opt.source_dir.display(),
            opt.clone_dir.display()
        )
    })?;
    for submission in missing {
        println!("{submission}");
    }
    Ok(())
}
