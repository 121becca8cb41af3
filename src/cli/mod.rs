//! CLI layer: command tree, argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod output;

pub use commands::{default_factories, ChartCommand, CommandFactory};
pub use dispatch::{Invocation, RootCommand};
pub use error::{exit_code_for, CliError, CliResult};
pub use output::Output;
