use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs::{ensure_dir, remove_file_if_present};

/// A test program to run, with its arguments. The outputs are named after the test.
///
/// ```
/// use autograde_exec::TestInvocation;
///
/// let test: TestInvocation = serde_json::from_str(r#"{
///     "name": "test1andtest2",
///     "programdir": ".",
///     "program": "duplines",
///     "args": ["test1.data", "test2.data"]
/// }"#).unwrap();
/// assert_eq!(test.program_path().to_str(), Some("./duplines"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestInvocation {
    /// Name of the test, the captured outputs are `<name>.stdout` and `<name>.stderr`.
    pub name: String,
    /// Directory containing the program.
    #[serde(alias = "programdir", default = "default_program_dir")]
    pub program_dir: PathBuf,
    /// Name of the program inside `program_dir`.
    pub program: String,
    /// Command line arguments of the program.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_program_dir() -> PathBuf {
    PathBuf::from(".")
}

/// The outcome of a test program that has been started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRun {
    /// How the program exited.
    pub status: ExitStatus,
    /// Where the standard output has been written.
    pub stdout: PathBuf,
    /// Where the standard error has been written.
    pub stderr: PathBuf,
}

#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Cannot read the test invocation from {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid test invocation in {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cannot prepare the output file {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to execute the test program {program:?}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TestInvocation {
    /// Make a new invocation of `program_dir/program` without arguments.
    pub fn new<S: Into<String>, P: Into<PathBuf>, S2: Into<String>>(
        name: S,
        program_dir: P,
        program: S2,
    ) -> TestInvocation {
        TestInvocation {
            name: name.into(),
            program_dir: program_dir.into(),
            program: program.into(),
            args: vec![],
        }
    }

    /// Read an invocation from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TestInvocation, InvocationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InvocationError::Read {
            path: path.into(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| InvocationError::Parse {
            path: path.into(),
            source,
        })
    }

    /// The path of the program to execute.
    pub fn program_path(&self) -> PathBuf {
        self.program_dir.join(&self.program)
    }

    /// Path of the file with the standard output, inside `output_dir`.
    pub fn stdout_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.stdout", self.name))
    }

    /// Path of the file with the standard error, inside `output_dir`.
    pub fn stderr_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.stderr", self.name))
    }
}

/// Run the test program writing its standard output and error in `output_dir`, which is
/// created if missing. Waits for the program to exit.
///
/// If the program cannot be started the output files are removed, so that no output of a
/// previous run is mistaken for the output of this one.
pub fn run(test: &TestInvocation, output_dir: &Path) -> Result<TestRun, InvocationError> {
    ensure_dir(output_dir).map_err(|source| InvocationError::Output {
        path: output_dir.into(),
        source,
    })?;
    let stdout = test.stdout_path(output_dir);
    let stderr = test.stderr_path(output_dir);
    let create = |path: &Path| {
        File::create(path).map_err(|source| InvocationError::Output {
            path: path.into(),
            source,
        })
    };

    let program = test.program_path();
    info!("Running test {} ({})", test.name, program.display());
    let mut command = Command::new(&program);
    command
        .args(&test.args)
        .stdout(create(stdout.as_path())?)
        .stderr(create(stderr.as_path())?);
    let status = match command.status() {
        Ok(status) => status,
        Err(source) => {
            for path in [&stdout, &stderr] {
                if let Err(e) = remove_file_if_present(path) {
                    warn!("Failed to remove {}: {}", path.display(), e);
                }
            }
            return Err(InvocationError::Spawn { program, source });
        }
    };
    info!("Test {} returned {}", test.name, status);
    Ok(TestRun {
        status,
        stdout,
        stderr,
    })
}
