//! Command dispatcher: builds the command tree, parses, routes to a handler

use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgMatches, Command};
use tracing::{debug, instrument};

use crate::cli::args::{root_command, DEBUG_ARG};
use crate::cli::commands::{ChartCommand, CommandFactory};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::Output;
use crate::infrastructure::InfraError;

/// Outcome of parsing the argument list.
#[derive(Debug)]
pub enum Invocation {
    /// Help or version text to print; nothing else runs.
    Help(String),
    /// Run the named subcommand with its parsed arguments.
    Run {
        verbosity: u8,
        name: String,
        matches: ArgMatches,
    },
}

impl Invocation {
    /// Number of `-d` flags given (0 for help output).
    pub fn verbosity(&self) -> u8 {
        match self {
            Invocation::Help(_) => 0,
            Invocation::Run { verbosity, .. } => *verbosity,
        }
    }
}

/// The `bazaar` command tree with one handler per subcommand.
pub struct RootCommand {
    command: Command,
    handlers: BTreeMap<String, Box<dyn ChartCommand>>,
    out: Output,
}

impl RootCommand {
    /// Build the tree, binding every factory to `out`.
    ///
    /// Fails if two factories produce the same command name.
    pub fn new(out: Output, factories: &[CommandFactory]) -> CliResult<Self> {
        let mut command = root_command();
        let mut handlers: BTreeMap<String, Box<dyn ChartCommand>> = BTreeMap::new();

        for factory in factories {
            let handler = factory(out.clone());
            let sub = handler.command();
            let name = sub.get_name().to_string();
            if handlers.contains_key(&name) {
                return Err(CliError::DuplicateCommand(name));
            }
            command = command.subcommand(sub);
            handlers.insert(name, handler);
        }

        Ok(Self {
            command,
            handlers,
            out,
        })
    }

    /// The assembled clap command.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Stream shared by the root and every subcommand.
    pub fn output(&self) -> &Output {
        &self.out
    }

    /// Registered subcommand names, sorted.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Handler registered under `name`.
    pub fn handler(&self, name: &str) -> Option<&dyn ChartCommand> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    /// Root help text.
    pub fn help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Parse `args` (program name excluded).
    pub fn parse<I, T>(&self, args: I) -> CliResult<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.command.clone().try_get_matches_from(args) {
            Ok(mut matches) => {
                let verbosity = matches.get_count(DEBUG_ARG);
                match matches.remove_subcommand() {
                    Some((name, matches)) => Ok(Invocation::Run {
                        verbosity,
                        name,
                        matches,
                    }),
                    None => Ok(Invocation::Help(self.help())),
                }
            }
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Invocation::Help(e.to_string()))
            }
            Err(e) => Err(CliError::Usage(e.to_string())),
        }
    }

    /// Run a parsed invocation; handler errors pass through unchanged.
    #[instrument(skip_all)]
    pub fn dispatch(&self, invocation: Invocation) -> CliResult<()> {
        match invocation {
            Invocation::Help(text) => self
                .out
                .text(&text)
                .map_err(|e| InfraError::io("write help", e).into()),
            Invocation::Run { name, matches, .. } => {
                let handler = self
                    .handlers
                    .get(&name)
                    .ok_or_else(|| CliError::Usage(format!("unknown command: {}", name)))?;
                debug!("dispatching to {}", name);
                handler.run(&matches)
            }
        }
    }

    /// Parse and dispatch in one step.
    pub fn execute<I, T>(&self, args: I) -> CliResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let invocation = self.parse(args)?;
        self.dispatch(invocation)
    }
}
