use std::path::PathBuf;

use thiserror::Error;

use crate::Submission;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Cannot scan submission directory {path:?}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid submission number {0:?}")]
    InvalidNumber(String),
    #[error("No submission clones in {0:?}")]
    NoClones(PathBuf),
    #[error("Cloned version {clone} is already newer than the latest provided version {provided}")]
    CloneAhead {
        clone: Submission,
        provided: Submission,
    },
}
