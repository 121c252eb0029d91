use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// What to do with the standard error of a captured command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StderrMode {
    /// Capture it and append it to the captured output, after the standard output.
    #[default]
    Merge,
    /// Leave it attached to the standard error of this process.
    Inherit,
}

/// A command to run capturing its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureCommand {
    /// The program to execute, searched in `$PATH` if not a path.
    pub program: String,
    /// The arguments passed to the program.
    pub args: Vec<String>,
    /// File to use as standard input. When `None` the standard input is inherited.
    pub stdin: Option<PathBuf>,
    /// How to handle the standard error.
    pub stderr: StderrMode,
}

/// Why a command could not be captured. Exit statuses, even non-zero ones, are never errors.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Empty command")]
    EmptyCommand,
    #[error("Invalid command line {0:?}")]
    InvalidCommandLine(String, #[source] shell_words::ParseError),
    #[error("Cannot open {path:?} as standard input")]
    Stdin {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to execute {program:?}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// The result of a command that has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// How the command exited.
    pub status: ExitStatus,
    /// What the command printed, decoded as UTF-8 replacing invalid sequences.
    pub output: String,
}

impl Captured {
    /// The exit code of the command, `None` if it was killed by a signal.
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Whether the command exited with zero.
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

impl CaptureCommand {
    /// Make a new command without arguments.
    pub fn new<S: Into<String>>(program: S) -> CaptureCommand {
        CaptureCommand {
            program: program.into(),
            args: vec![],
            stdin: None,
            stderr: StderrMode::default(),
        }
    }

    /// Build a command from the program followed by its arguments.
    pub fn from_argv<I, S>(argv: I) -> Result<CaptureCommand, CaptureError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::<String>::into);
        let program = argv.next().ok_or(CaptureError::EmptyCommand)?;
        let mut command = CaptureCommand::new(program);
        command.args(argv);
        Ok(command)
    }

    /// Split a command line following the shell quoting rules. Nothing else of the shell syntax
    /// is supported, use [`CaptureCommand::shell`] for that.
    pub fn parse(line: &str) -> Result<CaptureCommand, CaptureError> {
        let argv = shell_words::split(line)
            .map_err(|e| CaptureError::InvalidCommandLine(line.to_string(), e))?;
        CaptureCommand::from_argv(argv)
    }

    /// A command line interpreted by `sh`.
    pub fn shell<S: Into<String>>(line: S) -> CaptureCommand {
        let mut command = CaptureCommand::new("sh");
        command.arg("-c").arg(line);
        command
    }

    /// Add an argument to the command.
    pub fn arg<S: Into<String>>(&mut self, arg: S) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// Add some arguments to the command.
    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Read the standard input from this file.
    pub fn stdin<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.stdin = Some(path.into());
        self
    }

    /// Set how the standard error is handled.
    pub fn stderr(&mut self, mode: StderrMode) -> &mut Self {
        self.stderr = mode;
        self
    }
}

/// Run the command, wait for it and return what it printed.
///
/// The command running is a success regardless of its exit status, the status is part of the
/// result. Only the failure to start it is an error.
pub fn capture(command: &CaptureCommand) -> Result<Captured, CaptureError> {
    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);
    cmd.stdout(Stdio::piped());
    match &command.stdin {
        Some(path) => {
            let file = File::open(path).map_err(|source| CaptureError::Stdin {
                path: path.clone(),
                source,
            })?;
            cmd.stdin(file);
        }
        None => {
            cmd.stdin(Stdio::inherit());
        }
    }
    match command.stderr {
        StderrMode::Merge => cmd.stderr(Stdio::piped()),
        StderrMode::Inherit => cmd.stderr(Stdio::inherit()),
    };

    debug!("Capturing {:?} {:?}", command.program, command.args);
    let output = cmd.output().map_err(|source| CaptureError::Spawn {
        program: command.program.clone(),
        source,
    })?;

    let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
    if command.stderr == StderrMode::Merge {
        captured += &String::from_utf8_lossy(&output.stderr);
    }
    debug!("{:?} exited with {}", command.program, output.status);
    Ok(Captured {
        status: output.status,
        output: captured,
    })
}
