use clap::Parser;

use autograde_tools::error::NiceError;
use autograde_tools::tools::capture::main_capture;
use autograde_tools::tools::check_json::main_check_json;
use autograde_tools::tools::clone_latest::main_clone_latest;
use autograde_tools::tools::gen_autocompletion::main_get_autocompletion;
use autograde_tools::tools::has_long_lines::main_has_long_lines;
use autograde_tools::tools::has_tabs::main_has_tabs;
use autograde_tools::tools::latest::main_latest;
use autograde_tools::tools::missing_clones::main_missing_clones;
use autograde_tools::tools::opt::{Opt, Tool};
use autograde_tools::tools::run_test::main_run_test;
use autograde_tools::tools::sort_lines::main_sort_lines;
use autograde_tools::tools::superseded::main_superseded;

fn main() {
    let base_opt = Opt::parse();
    base_opt.logger.enable_log();

    match base_opt.tool {
        Tool::Latest(opt) => main_latest(opt),
        Tool::MissingClones(opt) => main_missing_clones(opt),
        Tool::Superseded(opt) => main_superseded(opt),
        Tool::CloneLatest(opt) => main_clone_latest(opt),
        Tool::HasTabs(opt) => main_has_tabs(opt),
        Tool::HasLongLines(opt) => main_has_long_lines(opt),
        Tool::CheckJson(opt) => main_check_json(opt),
        Tool::SortLines(opt) => main_sort_lines(opt),
        Tool::Capture(opt) => main_capture(opt),
        Tool::RunTest(opt) => main_run_test(opt),
        Tool::GenAutocompletion(opt) => main_get_autocompletion(opt),
    }
    .nice_unwrap()
}
