//! Command line entry point.
//!
//! With no subcommand the interactive viewer starts; `stats` and `show` print
//! to stdout and exit.

pub mod commands;
pub mod logging;

pub use commands::{Cli, Commands, run};
