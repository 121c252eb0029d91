//! Tool that generates the autocompletion scripts inside the target/autocompletion directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, Shell};

use autograde_exec::fs::ensure_dir;

const BIN_NAME: &str = "autograde-tools";

#[derive(Parser, Debug, Clone)]
pub struct GenAutocompletionOpt {
    /// Where to write the autocompletion files
    #[clap(short = 't', long = "target")]
    pub target: Option<PathBuf>,
}

pub fn main_get_autocompletion(opt: GenAutocompletionOpt) -> Result<(), Error> {
    let target = if let Some(target) = opt.target {
        target
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("target/autocompletion")
    };
    ensure_dir(&target)
        .with_context(|| format!("Failed to create target dir: {}", target.display()))?;
    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::Elvish,
        Shell::PowerShell,
    ] {
        generate(shell, &target)?;
    }
    Ok(())
}

fn generate(shell: Shell, target: &Path) -> Result<(), Error> {
    let target = target.join(shell.file_name(BIN_NAME));
    let mut file = File::create(&target).with_context(|| {
        format!(
            "Failed to create completion for {} at {}",
            shell,
            target.display()
        )
    })?;
    let mut command = crate::tools::opt::Opt::command();
    clap_complete::generate(shell, &mut command, BIN_NAME, &mut file);
    Ok(())
}
