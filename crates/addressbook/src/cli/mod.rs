//! Command-line interface for addressbook.
//!
//! This module provides the CLI structure for the `abook` binary and the
//! parser for lines typed into its interactive shell.

mod commands;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AccountCommand, ConfigCommand, CredentialsArgs};
pub use shell::{AddArgs, EditArgs, ShellCommand, ShellLine, ShellParseError};

/// abook - a multi-user address book
///
/// Log in to keep a private address book per user, with undo and redo for
/// every change.
#[derive(Debug, Parser)]
#[command(name = "abook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to the interactive shell)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive shell
    Shell,

    /// Manage accounts
    #[command(subcommand)]
    Account(AccountCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
