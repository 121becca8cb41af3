//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Arg, ArgAction, Args, Command, ValueHint};

use crate::config::Settings;

/// Name of the root command.
pub const ROOT_NAME: &str = "bazaar";

/// Global verbosity flag id.
pub const DEBUG_ARG: &str = "debug";

/// Root of the command tree: name, description and the global flags.
///
/// Subcommands are attached by the dispatcher.
pub fn root_command() -> Command {
    Command::new(ROOT_NAME)
        .about("The Kibosh chart manager.")
        .version(env!("CARGO_PKG_VERSION"))
        .propagate_version(true)
        .no_binary_name(true)
        .arg(
            Arg::new(DEBUG_ARG)
                .short('d')
                .long("debug")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-d info, -dd debug, -ddd trace)"),
        )
}

/// Bazaar API coordinates shared by every chart command.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct EndpointArgs {
    /// Bazaar API URL (or BAZAAR_TARGET)
    #[arg(short, long, value_hint = ValueHint::Url)]
    pub target: Option<String>,

    /// Bazaar API user (or BAZAAR_USER)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Bazaar API password (or BAZAAR_PASSWORD)
    #[arg(short, long)]
    pub password: Option<String>,
}

impl From<EndpointArgs> for Settings {
    fn from(args: EndpointArgs) -> Self {
        Settings {
            target: args.target,
            user: args.user,
            password: args.password,
        }
    }
}

/// Arguments of `bazaar list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

/// Arguments of `bazaar save`.
#[derive(Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Chart archive to upload (.tgz)
    #[arg(value_hint = ValueHint::FilePath)]
    pub chart: PathBuf,
}

/// Arguments of `bazaar delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Name of the chart to delete
    pub name: String,
}
