//! Chart commands: the handlers behind `list`, `save` and `delete`
//!
//! Each command is produced by a factory that receives the shared output
//! stream, so the dispatcher can swap in other implementations.

use std::sync::Arc;

use clap::{ArgMatches, Args, Command, FromArgMatches};
use tracing::{debug, instrument};

use crate::cli::args::{DeleteArgs, ListArgs, SaveArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{format_chart_table, Output};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// A runnable leaf of the command tree.
pub trait ChartCommand {
    /// Clap definition: name, description and flags.
    fn command(&self) -> Command;

    /// Execute with the arguments parsed for this command.
    fn run(&self, matches: &ArgMatches) -> CliResult<()>;

    /// Stream this command writes its results to.
    fn output(&self) -> &Output;
}

/// Given the shared output stream, produce a command.
pub type CommandFactory = Box<dyn Fn(Output) -> Box<dyn ChartCommand>>;

fn parse_args<T: FromArgMatches>(matches: &ArgMatches) -> CliResult<T> {
    T::from_arg_matches(matches).map_err(|e| CliError::InvalidArgs(e.to_string()))
}

fn write_err(e: std::io::Error) -> CliError {
    InfraError::io("write command output", e).into()
}

/// `bazaar list`
pub struct ChartsListCmd {
    out: Output,
    container: Arc<ServiceContainer>,
}

impl ChartCommand for ChartsListCmd {
    fn command(&self) -> Command {
        ListArgs::augment_args(Command::new("list").about("List the charts stored in bazaar"))
    }

    #[instrument(skip_all)]
    fn run(&self, matches: &ArgMatches) -> CliResult<()> {
        let args: ListArgs = parse_args(matches)?;
        let service = self.container.chart_service(&Settings::from(args.endpoint))?;
        let charts = service.list()?;
        debug!("rendering {} charts", charts.len());
        self.out
            .text(&format_chart_table(&charts))
            .map_err(write_err)
    }

    fn output(&self) -> &Output {
        &self.out
    }
}

/// `bazaar save <chart>`
pub struct ChartsSaveCmd {
    out: Output,
    container: Arc<ServiceContainer>,
}

impl ChartCommand for ChartsSaveCmd {
    fn command(&self) -> Command {
        SaveArgs::augment_args(Command::new("save").about("Upload a chart archive to bazaar"))
    }

    #[instrument(skip_all)]
    fn run(&self, matches: &ArgMatches) -> CliResult<()> {
        let args: SaveArgs = parse_args(matches)?;
        let service = self.container.chart_service(&Settings::from(args.endpoint))?;
        let reply = service.save(&args.chart)?;
        self.out.success(&reply.message).map_err(write_err)
    }

    fn output(&self) -> &Output {
        &self.out
    }
}

/// `bazaar delete <name>`
pub struct ChartsDeleteCmd {
    out: Output,
    container: Arc<ServiceContainer>,
}

impl ChartCommand for ChartsDeleteCmd {
    fn command(&self) -> Command {
        DeleteArgs::augment_args(Command::new("delete").about("Delete a chart from bazaar"))
    }

    #[instrument(skip_all)]
    fn run(&self, matches: &ArgMatches) -> CliResult<()> {
        let args: DeleteArgs = parse_args(matches)?;
        let service = self.container.chart_service(&Settings::from(args.endpoint))?;
        let reply = service.delete(&args.name)?;
        self.out.success(&reply.message).map_err(write_err)
    }

    fn output(&self) -> &Output {
        &self.out
    }
}

pub fn new_charts_list_cmd(out: Output, container: Arc<ServiceContainer>) -> Box<dyn ChartCommand> {
    Box::new(ChartsListCmd { out, container })
}

pub fn new_charts_save_cmd(out: Output, container: Arc<ServiceContainer>) -> Box<dyn ChartCommand> {
    Box::new(ChartsSaveCmd { out, container })
}

pub fn new_charts_delete_cmd(
    out: Output,
    container: Arc<ServiceContainer>,
) -> Box<dyn ChartCommand> {
    Box::new(ChartsDeleteCmd { out, container })
}

/// Factories for the `list`, `save` and `delete` commands, all sharing one container.
pub fn default_factories(container: Arc<ServiceContainer>) -> Vec<CommandFactory> {
    let list = container.clone();
    let save = container.clone();
    let delete = container;
    vec![
        Box::new(move |out: Output| new_charts_list_cmd(out, list.clone())) as CommandFactory,
        Box::new(move |out: Output| new_charts_save_cmd(out, save.clone())) as CommandFactory,
        Box::new(move |out: Output| new_charts_delete_cmd(out, delete.clone())) as CommandFactory,
    ]
}
