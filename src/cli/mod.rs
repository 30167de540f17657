//! # CLI Module
//!
//! Command-line interface for bibliodb:
//! - serve: boot the catalog server
//! - search/add/edit/delete/show: thin client commands against a running
//!   server

mod args;
mod commands;
mod errors;

pub use args::{BookArgs, Cli, Command, EditArgs, SearchArgs};
pub use commands::run;
pub use errors::{CliError, CliResult};
