//! Parsing of interactive shell lines into commands.
//!
//! Lines are split like a POSIX shell would (so quoted names work) and then
//! parsed by clap, so every shell command gets `--help` for free.

use std::collections::BTreeSet;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use super::commands::CredentialsArgs;
use crate::account::{PasswordHash, Username};
use crate::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand, HelpCommand,
    ListCommand, LoginCommand, LogoutCommand, PersonEdit, RedoCommand, UndoCommand,
};
use crate::model::Person;

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
#[command(name = "abook", about = "Address book shell")]
pub struct ShellLine {
    /// The command to run
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside the shell.
#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Log in to an account
    Login(CredentialsArgs),

    /// Log out of the current account
    Logout,

    /// Add a person
    Add(AddArgs),

    /// Delete a person by id
    Delete {
        /// Id of the person to delete
        id: String,
    },

    /// Edit a person by id
    Edit(EditArgs),

    /// Remove every person
    Clear,

    /// List every person
    List,

    /// Undo the last change
    Undo,

    /// Redo the last undone change
    Redo,

    /// Show available commands
    Help,

    /// Leave the shell
    Exit,
}

/// Arguments for adding a person.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Unique id
    #[arg(short, long)]
    pub id: String,

    /// Phone number
    #[arg(short, long)]
    pub phone: String,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments for editing a person.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the person to edit
    pub target: String,

    /// New full name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New id
    #[arg(short, long)]
    pub id: Option<String>,

    /// New phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Replacement tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Remove every tag
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

/// Why a shell line could not be turned into a command.
#[derive(Debug, Error)]
pub enum ShellParseError {
    /// The line is empty or only whitespace.
    #[error("empty command")]
    Empty,
    /// Unbalanced quotes or a trailing escape.
    #[error("could not split command line: {0}")]
    Split(shell_words::ParseError),
    /// clap rejected the arguments (this includes `--help` output).
    #[error("{0}")]
    Clap(clap::Error),
    /// The arguments parsed but were invalid.
    #[error("{0}")]
    Invalid(crate::error::Error),
}

impl ShellLine {
    /// Parse a raw input line.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellParseError`] if the line is empty, cannot be split, or
    /// is not a valid command.
    pub fn parse_line(line: &str) -> Result<Self, ShellParseError> {
        let words = shell_words::split(line).map_err(ShellParseError::Split)?;
        if words.is_empty() {
            return Err(ShellParseError::Empty);
        }
        Self::try_parse_from(words).map_err(ShellParseError::Clap)
    }
}

impl ShellCommand {
    /// Whether the raw line may be kept in the shell's line history.
    ///
    /// Login lines carry a plaintext password and are never kept.
    #[must_use]
    pub fn keep_in_history(&self) -> bool {
        !matches!(self, Self::Login(_))
    }

    /// Build the executable command.
    ///
    /// Passwords are hashed here; only the hash reaches the account layer.
    ///
    /// # Errors
    ///
    /// Returns [`ShellParseError::Invalid`] if a username is invalid.
    pub fn into_command(self) -> Result<Box<dyn Command>, ShellParseError> {
        let command: Box<dyn Command> = match self {
            Self::Login(creds) => {
                let username = Username::new(creds.username).map_err(ShellParseError::Invalid)?;
                Box::new(LoginCommand::new(
                    username,
                    PasswordHash::from_plaintext(&creds.password),
                ))
            }
            Self::Logout => Box::new(LogoutCommand),
            Self::Add(args) => Box::new(AddCommand::new(Person::new(
                args.name, args.id, args.phone, args.tags,
            ))),
            Self::Delete { id } => Box::new(DeleteCommand::new(id)),
            Self::Edit(args) => {
                let tags = if args.clear_tags {
                    Some(BTreeSet::new())
                } else if args.tags.is_empty() {
                    None
                } else {
                    Some(args.tags.into_iter().collect())
                };
                let edit = PersonEdit {
                    name: args.name,
                    id: args.id,
                    phone: args.phone,
                    tags,
                };
                Box::new(EditCommand::new(args.target, edit))
            }
            Self::Clear => Box::new(ClearCommand),
            Self::List => Box::new(ListCommand),
            Self::Undo => Box::new(UndoCommand),
            Self::Redo => Box::new(RedoCommand),
            Self::Help => Box::new(HelpCommand),
            Self::Exit => Box::new(ExitCommand),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::parse_line(line).unwrap().command
    }

    #[test]
    fn test_shell_verify() {
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_parse_login() {
        let cmd = parse("login --username john1234 --password qweasd123");
        let ShellCommand::Login(creds) = cmd else {
            panic!("expected login");
        };
        assert_eq!(creds.username, "john1234");
        assert_eq!(creds.password, "qweasd123");
    }

    #[test]
    fn test_login_hashes_password() {
        let command = parse("login -u john1234 -p qweasd123").into_command().unwrap();
        let debug_str = format!("{command:?}");
        assert_eq!(command.word(), "login");
        assert!(!debug_str.contains("qweasd123"));
    }

    #[test]
    fn test_login_rejects_unsafe_username() {
        let err = parse("login -u ../etc -p x").into_command().unwrap_err();
        assert!(matches!(err, ShellParseError::Invalid(_)));
    }

    #[test]
    fn test_parse_add_with_quotes_and_tags() {
        let cmd = parse(r#"add --name "Alex Yeoh" --id alex123 --phone 87438807 -t HR -t IT"#);
        let ShellCommand::Add(args) = cmd else {
            panic!("expected add");
        };
        assert_eq!(args.name, "Alex Yeoh");
        assert_eq!(args.tags, ["HR", "IT"]);
    }

    #[test]
    fn test_parse_edit() {
        let cmd = parse("edit alex123 --phone 11111111 --clear-tags");
        let ShellCommand::Edit(args) = cmd else {
            panic!("expected edit");
        };
        assert_eq!(args.target, "alex123");
        assert_eq!(args.phone.as_deref(), Some("11111111"));
        assert!(args.clear_tags);
    }

    #[test]
    fn test_simple_commands() {
        for (line, word) in [
            ("logout", "logout"),
            ("delete alex123", "delete"),
            ("clear", "clear"),
            ("list", "list"),
            ("undo", "undo"),
            ("redo", "redo"),
            ("help", "help"),
            ("exit", "exit"),
        ] {
            assert_eq!(parse(line).into_command().unwrap().word(), word);
        }
    }

    #[test]
    fn test_login_lines_stay_out_of_history() {
        assert!(!parse("login -u john1234 -p qweasd123").keep_in_history());
        assert!(parse("add -n A -i a -p 1").keep_in_history());
        assert!(parse("undo").keep_in_history());
    }

    #[test]
    fn test_empty_line() {
        assert!(matches!(
            ShellLine::parse_line("   "),
            Err(ShellParseError::Empty)
        ));
    }

    #[test]
    fn test_unbalanced_quotes() {
        assert!(matches!(
            ShellLine::parse_line("add --name \"Alex"),
            Err(ShellParseError::Split(_))
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            ShellLine::parse_line("frobnicate"),
            Err(ShellParseError::Clap(_))
        ));
    }
}
