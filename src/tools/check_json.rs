use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;

use crate::checks::check_json;

#[derive(Parser, Debug, Clone)]
pub struct CheckJsonOpt {
    /// The files to check
    #[clap(required = true)]
    pub files: Vec<PathBuf>,
}

/// Print the name of every file that is not valid JSON, followed by the reason.
pub fn main_check_json(opt: CheckJsonOpt) -> Result<(), Error> {
    for file in &opt.files {
        match check_json(file) {
            Ok(()) => debug!("{} is valid", file.display()),
            Err(e) => {
                println!("{}", file.display());
                println!("{:#}", Error::new(e));
            }
        }
    }
    Ok(())
}
