use std::ffi::OsString;
use std::sync::Arc;
use std::{env, process};

use bazaar::cli::output::{self, Output};
use bazaar::cli::{default_factories, exit_code_for, CliError, CliResult, RootCommand};
use bazaar::config::Settings;
use bazaar::infrastructure::di::ServiceContainer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let result = run(env::args_os().skip(1));
    match &result {
        // clap already formats its own message
        Err(CliError::Usage(msg)) => eprint!("{}", msg),
        Err(e) => output::error(e),
        Ok(()) => {}
    }
    process::exit(exit_code_for(&result));
}

fn run(args: impl IntoIterator<Item = OsString>) -> CliResult<()> {
    let settings = Settings::load()?;
    let container = Arc::new(ServiceContainer::new(settings));
    let root = RootCommand::new(Output::stdout(), &default_factories(container))?;

    let invocation = root.parse(args)?;
    setup_logging(invocation.verbosity());
    root.dispatch(invocation)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            output::warning("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr, stdout belongs to command output
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar::cli::args::root_command;
    use bazaar::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        root_command().debug_assert();
    }

    #[test]
    fn verify_default_command_tree() {
        testing::init_test_setup();
        let container = Arc::new(ServiceContainer::new(Settings::default()));
        let root = RootCommand::new(Output::new(Vec::new()), &default_factories(container)).unwrap();

        root.command().clone().debug_assert();
        let names: Vec<&str> = root.command_names().collect();
        assert_eq!(names, vec!["delete", "list", "save"]);
    }
}
