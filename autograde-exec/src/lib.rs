//! Running commands and test programs for the autograder.
//!
//! - [`capture`] runs a command and returns what it printed together with its exit status;
//!   failing to start the command is a [`CaptureError`], never a special output value.
//! - [`run`] executes a [`TestInvocation`], storing its outputs in files named after the test.
//! - [`fs`] contains the filesystem operations that can be repeated safely.

#[macro_use]
extern crate log;

mod capture;
pub mod fs;
mod invocation;

pub use capture::{capture, CaptureCommand, CaptureError, Captured, StderrMode};
pub use invocation::{run, InvocationError, TestInvocation, TestRun};
