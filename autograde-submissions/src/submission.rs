use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

use crate::SubmissionError;

lazy_static! {
    /// First filter on the entry names: something, a dot and a non-zero digit. Hidden entries
    /// never match.
    static ref SUBMISSION_PATTERN: Pattern = Pattern::new("*.[1-9]*").unwrap();
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// The attempt number of a submission: a strictly positive integer of any size.
///
/// The digits are kept as they appear in the name. Without leading zeros a longer number is
/// always bigger, so the numbers compare exactly by length first and then by digits.
///
/// ```
/// use autograde_submissions::SubmissionNumber;
///
/// let small: SubmissionNumber = "9".parse().unwrap();
/// let big: SubmissionNumber = "123456789012345678901234567890".parse().unwrap();
/// assert!(small < big);
/// assert_eq!(SubmissionNumber::from(10u64), "10".parse().unwrap());
/// assert!("05".parse::<SubmissionNumber>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubmissionNumber(String);

impl SubmissionNumber {
    /// The digits of the number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value of the number, if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    fn is_valid(digits: &str) -> bool {
        matches!(digits.as_bytes().first(), Some(b'1'..=b'9'))
            && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FromStr for SubmissionNumber {
    type Err = SubmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if SubmissionNumber::is_valid(s) {
            Ok(SubmissionNumber(s.to_string()))
        } else {
            Err(SubmissionError::InvalidNumber(s.to_string()))
        }
    }
}

impl TryFrom<String> for SubmissionNumber {
    type Error = SubmissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if SubmissionNumber::is_valid(&value) {
            Ok(SubmissionNumber(value))
        } else {
            Err(SubmissionError::InvalidNumber(value))
        }
    }
}

impl From<SubmissionNumber> for String {
    fn from(number: SubmissionNumber) -> Self {
        number.0
    }
}

/// Panics if `number` is zero.
impl From<u64> for SubmissionNumber {
    fn from(number: u64) -> Self {
        assert_ne!(number, 0, "Submission numbers start from 1");
        SubmissionNumber(number.to_string())
    }
}

impl Ord for SubmissionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SubmissionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for SubmissionNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single submission of a login, named `<login>.<number>` on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Submission {
    /// Who submitted.
    pub login: String,
    /// The attempt number, strictly positive.
    pub number: SubmissionNumber,
}

impl Submission {
    /// Make a new submission from its parts. Panics if `number` is zero.
    pub fn new<S: Into<String>>(login: S, number: u64) -> Submission {
        Submission::with_number(login, number.into())
    }

    /// Make a new submission with a number of any size.
    pub fn with_number<S: Into<String>>(login: S, number: SubmissionNumber) -> Submission {
        Submission {
            login: login.into(),
            number,
        }
    }

    /// Parse the name of a directory entry following the naming contract: `<login>.<n>` where
    /// `<n>` is a positive integer without leading zeros. Names that do not follow the contract
    /// are `None`.
    ///
    /// ```
    /// use autograde_submissions::Submission;
    ///
    /// assert_eq!(Submission::parse("alice.12"), Some(Submission::new("alice", 12)));
    /// assert_eq!(Submission::parse("alice.05"), None);
    /// assert_eq!(Submission::parse("readme.txt"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Submission> {
        if !SUBMISSION_PATTERN.matches_with(name, MATCH_OPTIONS) {
            return None;
        }
        let (login, number) = name.rsplit_once('.')?;
        if login.is_empty() {
            return None;
        }
        Some(Submission::with_number(login, number.parse().ok()?))
    }

    /// Parse the last component of `path`. Paths whose name is not valid UTF-8 are not
    /// submissions.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Submission> {
        let name = path.as_ref().file_name()?.to_str()?;
        Submission::parse(name)
    }

    /// The name of the entry of this submission.
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl Display for Submission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.login, self.number)
    }
}
