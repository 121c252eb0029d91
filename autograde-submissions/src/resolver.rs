use std::collections::{btree_map, BTreeMap};
use std::path::{Path, PathBuf};

use crate::{Submission, SubmissionError, SubmissionNumber};

/// The latest submission number of each login found in a directory.
///
/// The index is built by a single scan of the directory and is not kept around: every call to
/// [`LatestSubmissionIndex::scan`] reads the directory again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestSubmissionIndex {
    /// The scanned directory, all the submissions are inside it.
    base: PathBuf,
    /// Maximum submission number of each login, sorted by login.
    latest: BTreeMap<String, SubmissionNumber>,
}

impl LatestSubmissionIndex {
    /// Scan the immediate children of `dir` and keep, for each login, the highest submission
    /// number. Entries not following the naming contract are skipped.
    pub fn scan<P: AsRef<Path>>(dir: P) -> Result<LatestSubmissionIndex, SubmissionError> {
        let dir = dir.as_ref();
        let scan_error = |source| SubmissionError::Scan {
            path: dir.into(),
            source,
        };
        let mut index = LatestSubmissionIndex {
            base: dir.into(),
            latest: BTreeMap::new(),
        };
        for entry in std::fs::read_dir(dir).map_err(scan_error)? {
            let entry = entry.map_err(scan_error)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                trace!("Skipping non UTF-8 entry {:?}", entry.path());
                continue;
            };
            match Submission::parse(name) {
                Some(submission) => index.insert(submission),
                None => trace!("Skipping {name:?}: not a submission"),
            }
        }
        debug!(
            "Found {} logins with submissions in {}",
            index.latest.len(),
            dir.display()
        );
        Ok(index)
    }

    fn insert(&mut self, submission: Submission) {
        match self.latest.entry(submission.login) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(submission.number);
            }
            btree_map::Entry::Occupied(mut entry) => {
                if *entry.get() < submission.number {
                    entry.insert(submission.number);
                }
            }
        }
    }

    /// Number of distinct logins.
    pub fn len(&self) -> usize {
        self.latest.len()
    }

    /// Whether no submission was found.
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    /// The latest submission number of `login`, if any.
    pub fn get(&self, login: &str) -> Option<&SubmissionNumber> {
        self.latest.get(login)
    }

    /// The directory this index was built from.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The latest submissions, sorted by login.
    pub fn submissions(&self) -> impl Iterator<Item = Submission> + '_ {
        self.latest
            .iter()
            .map(|(login, number)| Submission::with_number(login.clone(), number.clone()))
    }
}

impl IntoIterator for LatestSubmissionIndex {
    type Item = PathBuf;
    type IntoIter = LatestSubmissions;

    fn into_iter(self) -> Self::IntoIter {
        LatestSubmissions {
            base: self.base,
            inner: self.latest.into_iter(),
        }
    }
}

/// Lazy iterator over the paths of the latest submissions, sorted by login. Each path is built
/// only when requested.
#[derive(Debug)]
pub struct LatestSubmissions {
    base: PathBuf,
    inner: btree_map::IntoIter<String, SubmissionNumber>,
}

impl Iterator for LatestSubmissions {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        let (login, number) = self.inner.next()?;
        Some(self.base.join(Submission::with_number(login, number).file_name()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for LatestSubmissions {}

/// Return the paths of the latest submission of every login inside `dir`, sorted by login.
///
/// The directory is scanned before returning, so a missing or unreadable directory is reported
/// here; the paths are then produced lazily.
///
/// ```no_run
/// use autograde_submissions::latest_submission_dirs;
///
/// for dir in latest_submission_dirs("/grading/hw02").unwrap() {
///     println!("{}", dir.display());
/// }
/// ```
pub fn latest_submission_dirs<P: AsRef<Path>>(
    dir: P,
) -> Result<LatestSubmissions, SubmissionError> {
    Ok(LatestSubmissionIndex::scan(dir)?.into_iter())
}

/// Like [`latest_submission_dirs`] but returns the parsed names instead of the paths.
pub fn latest_submissions<P: AsRef<Path>>(dir: P) -> Result<Vec<Submission>, SubmissionError> {
    Ok(LatestSubmissionIndex::scan(dir)?.submissions().collect())
}
