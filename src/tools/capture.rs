use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::Parser;

use autograde_exec::{capture, CaptureCommand, StderrMode};

#[derive(Parser, Debug, Clone)]
pub struct CaptureOpt {
    /// Interpret the command with `sh -c`, joining its words with spaces.
    #[clap(long)]
    pub shell: bool,

    /// File to use as standard input of the command.
    #[clap(long)]
    pub stdin: Option<PathBuf>,

    /// Do not capture the standard error, leave it on the terminal.
    #[clap(long)]
    pub no_merge_stderr: bool,

    /// The command to execute, with its arguments.
    #[clap(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CaptureOpt {
    fn to_command(&self) -> Result<CaptureCommand, Error> {
        let mut command = if self.shell {
            CaptureCommand::shell(self.command.join(" "))
        } else {
            CaptureCommand::from_argv(self.command.iter().cloned())?
        };
        if let Some(stdin) = &self.stdin {
            command.stdin(stdin);
        }
        if self.no_merge_stderr {
            command.stderr(StderrMode::Inherit);
        }
        Ok(command)
    }
}

/// Run the command, print what it printed and exit with its exit code. A command killed by a
/// signal exits with 128 plus the signal number, like in the shell.
pub fn main_capture(opt: CaptureOpt) -> Result<(), Error> {
    let command = opt.to_command()?;
    let captured = capture(&command).context("Failed to capture the command")?;
    let mut stdout = std::io::stdout();
    stdout.write_all(captured.output.as_bytes())?;
    stdout.flush()?;

    let code = match (captured.exit_code(), captured.status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    };
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
