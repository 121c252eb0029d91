//! The subcommands of `autograde-tools`, one module per tool.

pub mod capture;
pub mod check_json;
pub mod clone_latest;
pub mod gen_autocompletion;
pub mod has_long_lines;
pub mod has_tabs;
pub mod latest;
pub mod missing_clones;
pub mod opt;
pub mod sort_lines;
pub mod superseded;
