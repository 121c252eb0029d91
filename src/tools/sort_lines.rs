use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::Parser;

use crate::canonical::{canonicalize_file, sort_lines, sort_num_lines};

#[derive(Parser, Debug, Clone)]
pub struct SortLinesOpt {
    /// The file to canonicalize
    pub input: PathBuf,

    /// Where to write the canonical output. If not specified it's printed to stdout.
    pub output: Option<PathBuf>,

    /// Every line is an integer, sort them by value
    #[clap(long, short)]
    pub numeric: bool,
}

pub fn main_sort_lines(opt: SortLinesOpt) -> Result<(), Error> {
    let canonicalizer = |text: &str| {
        if opt.numeric {
            sort_num_lines(text)
        } else {
            Ok(sort_lines(text))
        }
    };
    match &opt.output {
        Some(output) => canonicalize_file(canonicalizer, &opt.input, output),
        None => {
            let content = std::fs::read_to_string(&opt.input)
                .with_context(|| format!("Failed to read {}", opt.input.display()))?;
            println!("{}", canonicalizer(&content)?);
            Ok(())
        }
    }
}
