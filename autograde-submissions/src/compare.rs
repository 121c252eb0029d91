use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter};
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::resolver::LatestSubmissionIndex;
use crate::{Submission, SubmissionError};

/// List the latest submissions of `source_dir` that are not the latest in `clone_dir`, either
/// because the login was never cloned or because the clone is older. The result is sorted.
///
/// It's an error if `clone_dir` contains no submission at all, since that usually means the
/// wrong directory was given.
pub fn missing_clones<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    clone_dir: Q,
) -> Result<Vec<Submission>, SubmissionError> {
    let source = LatestSubmissionIndex::scan(source_dir)?;
    let clones = LatestSubmissionIndex::scan(clone_dir.as_ref())?;
    if clones.is_empty() {
        return Err(SubmissionError::NoClones(clone_dir.as_ref().into()));
    }
    let cloned: BTreeSet<_> = clones.submissions().collect();
    Ok(source
        .submissions()
        .filter(|sub| !cloned.contains(sub))
        .collect())
}

/// Outcome of the comparison between the provide directory and a clone of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersededReport {
    /// Submissions of logins that are not in the clone at all.
    pub new: Vec<Submission>,
    /// Submissions that are newer than the cloned version of the same login.
    pub updated: Vec<Submission>,
}

impl SupersededReport {
    /// Whether the clone is up to date.
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.updated.is_empty()
    }
}

impl Display for SupersededReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "New_dirs: {}", self.new.iter().join(" "))?;
        write!(f, "Updated_dirs: {}", self.updated.iter().join(" "))
    }
}

/// Compare the latest submissions in `provide_dir` with the ones in `clone_dir`, splitting the
/// ones not yet cloned into brand new and updated.
///
/// A clone newer than what is provided is inconsistent and makes this fail.
pub fn superseded<P: AsRef<Path>, Q: AsRef<Path>>(
    provide_dir: P,
    clone_dir: Q,
) -> Result<SupersededReport, SubmissionError> {
    let provide_index = LatestSubmissionIndex::scan(provide_dir)?;
    let cloned: HashMap<_, _> = LatestSubmissionIndex::scan(clone_dir)?
        .submissions()
        .map(|sub| (sub.login.clone(), sub))
        .collect();

    let mut report = SupersededReport::default();
    for provided in provide_index.submissions() {
        match cloned.get(&provided.login) {
            None => report.new.push(provided),
            Some(clone) if clone.number == provided.number => {}
            Some(clone) if clone.number < provided.number => report.updated.push(provided),
            Some(clone) => {
                return Err(SubmissionError::CloneAhead {
                    clone: clone.clone(),
                    provided,
                })
            }
        }
    }
    Ok(report)
}
