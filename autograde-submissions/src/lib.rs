//! Resolution of the student submissions stored on disk.
//!
//! Every submission is a directory (or a file) named `<login>.<n>`, where `<n>` is a positive
//! integer without leading zeros that increases at every new attempt of the same login. This
//! crate finds the latest attempt of every login and compares two trees of submissions.
//!
//! ```no_run
//! use autograde_submissions::latest_submission_dirs;
//!
//! # fn main() -> Result<(), autograde_submissions::SubmissionError> {
//! let dirs: Vec<_> = latest_submission_dirs("/grading/hw02")?.collect();
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

mod compare;
mod error;
mod resolver;
mod submission;

pub use compare::{missing_clones, superseded, SupersededReport};
pub use error::SubmissionError;
pub use resolver::{
    latest_submission_dirs, latest_submissions, LatestSubmissionIndex, LatestSubmissions,
};
pub use submission::{Submission, SubmissionNumber};
