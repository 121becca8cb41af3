//! bazaar: command-line client for the Kibosh chart manager
//!
//! `list`, `save` and `delete` charts on a Bazaar API. The command tree is
//! built by [`cli::RootCommand`] from injected command factories.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
