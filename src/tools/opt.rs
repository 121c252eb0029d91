use clap::{Parser, Subcommand};

use crate::tools::capture::CaptureOpt;
use crate::tools::check_json::CheckJsonOpt;
use crate::tools::clone_latest::CloneLatestOpt;
use crate::tools::gen_autocompletion::GenAutocompletionOpt;
use crate::tools::has_long_lines::HasLongLinesOpt;
use crate::tools::has_tabs::HasTabsOpt;
use crate::tools::latest::LatestOpt;
use crate::tools::missing_clones::MissingClonesOpt;
use crate::tools::run_test::RunTestOpt;
use crate::tools::sort_lines::SortLinesOpt;
use crate::tools::superseded::SupersededOpt;
use crate::LoggerOpt;

#[derive(Parser, Debug)]
#[clap(
    name = "autograde-tools",
    version = include_str!(concat!(env!("OUT_DIR"), "/version.txt")),
)]
pub struct Opt {
    #[clap(flatten, next_help_heading = Some("LOGGING"))]
    pub logger: LoggerOpt,

    /// Which tool to use
    #[clap(subcommand)]
    pub tool: Tool,
}

#[derive(Subcommand, Debug)]
pub enum Tool {
    /// List the latest submission of every login in a directory
    Latest(LatestOpt),
    /// List the latest submissions that are missing or outdated in a clone directory
    MissingClones(MissingClonesOpt),
    /// List the submissions that are new or updated with respect to a clone directory
    Superseded(SupersededOpt),
    /// Copy the latest submission of every login
    CloneLatest(CloneLatestOpt),
    /// Check that a file does not contain tabs
    ///
    /// Exits with 0 and prints nothing if there are no tabs, exits with 4 and prints the message
    /// to stderr otherwise.
    HasTabs(HasTabsOpt),
    /// Check that a file does not contain lines that are too long
    ///
    /// Exits with 0 and prints nothing if all the lines are short enough, exits with 4 and prints
    /// the message to stderr otherwise.
    HasLongLines(HasLongLinesOpt),
    /// Print the files that are not valid JSON, with the reason
    CheckJson(CheckJsonOpt),
    /// Canonicalize a file by sorting its lines, alphabetically or by numeric value
    SortLines(SortLinesOpt),
    /// Run a command and print its output, exiting with its exit code
    Capture(CaptureOpt),
    /// Run a test program storing its standard output and error in files
    RunTest(RunTestOpt),
    /// Generate the autocompletion files for the shell
    GenAutocompletion(GenAutocompletionOpt),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Opt::command().debug_assert();
    }

    #[test]
    fn test_parse_latest() {
        let opt = Opt::parse_from(["autograde-tools", "-v", "latest", "/grading/hw02", "--json"]);
        assert_eq!(opt.logger.verbose, 1);
        match opt.tool {
            Tool::Latest(latest) => {
                assert_eq!(latest.dir.to_str(), Some("/grading/hw02"));
                assert!(latest.json);
            }
            other => panic!("Unexpected tool {other:?}"),
        }
    }
}
