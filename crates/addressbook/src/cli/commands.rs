//! CLI command definitions.
//!
//! This module defines the structure of the top-level subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Account management commands.
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Register a new account
    Register(CredentialsArgs),

    /// List registered usernames
    List,
}

/// Username and password arguments.
#[derive(Debug, Clone, Args)]
pub struct CredentialsArgs {
    /// Account username
    #[arg(short, long)]
    pub username: String,

    /// Account password (hashed before use)
    #[arg(short, long)]
    pub password: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_command_debug() {
        let cmd = AccountCommand::Register(CredentialsArgs {
            username: "alice".to_string(),
            password: "secret".to_string(),
        });
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Register"));
        assert!(debug_str.contains("alice"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
