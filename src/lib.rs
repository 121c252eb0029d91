//! # autograde-tools
//!
//! Utilities for the autograding of student programming assignments. This is both an
//! application and a library: the `autograde-tools` binary exposes every tool as a subcommand.
//!
//! The resolution of the submissions lives in `autograde-submissions`, the execution of commands
//! and test programs in `autograde-exec`.

#[macro_use]
extern crate log;

pub mod canonical;
pub mod checks;
pub mod error;
pub mod opt;
pub mod tools;

pub use opt::*;
