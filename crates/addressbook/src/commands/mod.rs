//! User-facing commands.
//!
//! Each command implements [`Command`] and runs against a [`CommandContext`]
//! giving it the active workspace, the account manager and the undo/redo
//! history. Commands report back through a [`CommandResult`] or fail with a
//! [`CommandError`] whose message is shown to the user as-is.

mod account;
mod edit;
mod history;
mod misc;

use thiserror::Error;

use crate::history::CommandHistory;
use crate::manager::{AccountManager, Workspace};

pub use account::{LoginCommand, LogoutCommand};
pub use edit::{AddCommand, ClearCommand, DeleteCommand, EditCommand, PersonEdit};
pub use history::{RedoCommand, UndoCommand};
pub use misc::{ExitCommand, HelpCommand, ListCommand};

/// Errors reported to the user when a command fails.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A login was attempted while a session is active.
    #[error("You are already logged in.")]
    AlreadyLoggedIn,

    /// The supplied credentials matched no account.
    #[error("Login failed. Invalid username or password.")]
    LoginFailed,

    /// A logout was attempted with no active session.
    #[error("You are not logged in.")]
    NotLoggedIn,

    /// Nothing has been done that could be undone.
    #[error("Nothing to undo.")]
    NothingToUndo,

    /// Nothing has been undone that could be redone.
    #[error("Nothing to redo.")]
    NothingToRedo,

    /// The command's arguments were rejected.
    #[error("Invalid command: {0}")]
    InvalidArguments(String),

    /// The model or storage rejected the operation.
    #[error("{0}")]
    Storage(#[from] crate::error::Error),
}

impl CommandError {
    /// Map history exhaustion onto the user-facing variants.
    fn from_history(err: crate::error::Error) -> Self {
        match err {
            crate::error::Error::NothingToUndo => Self::NothingToUndo,
            crate::error::Error::NothingToRedo => Self::NothingToRedo,
            other => Self::Storage(other),
        }
    }
}

/// The outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    /// Help information should be shown to the user.
    pub show_help: bool,
    /// The application should exit.
    pub exit: bool,
    /// The presentation should toggle its display.
    pub toggle_display: bool,
    /// A user has just logged in.
    pub login: bool,
    /// The user has just logged out.
    pub logout: bool,
}

impl CommandResult {
    /// A result carrying only feedback text.
    #[must_use]
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            toggle_display: false,
            login: false,
            logout: false,
        }
    }

    /// Feedback text for the user.
    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Set the help flag.
    #[must_use]
    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    /// Set the exit flag.
    #[must_use]
    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Set the toggle-display flag.
    #[must_use]
    pub fn with_toggle_display(mut self) -> Self {
        self.toggle_display = true;
        self
    }

    /// Set the login flag.
    #[must_use]
    pub fn with_login(mut self) -> Self {
        self.login = true;
        self
    }

    /// Set the logout flag.
    #[must_use]
    pub fn with_logout(mut self) -> Self {
        self.logout = true;
        self
    }
}

/// Everything a command may read or change.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// The active model and its storage.
    pub workspace: &'a mut Workspace,
    /// Accounts and the login session.
    pub accounts: &'a mut AccountManager,
    /// Undo/redo history of the active workspace.
    pub history: &'a mut CommandHistory,
}

impl CommandContext<'_> {
    /// Install a new workspace, dropping history that belonged to the old one.
    fn switch_workspace(&mut self, workspace: Workspace) {
        *self.workspace = workspace;
        self.history.clear();
    }
}

/// An executable command.
pub trait Command: std::fmt::Debug {
    /// The word that invokes this command.
    fn word(&self) -> &'static str;

    /// Run the command.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing why the command failed.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_defaults() {
        let result = CommandResult::new("done");
        assert_eq!(result.feedback(), "done");
        assert!(!result.show_help);
        assert!(!result.exit);
        assert!(!result.toggle_display);
        assert!(!result.login);
        assert!(!result.logout);
    }

    #[test]
    fn test_command_result_flags() {
        let result = CommandResult::new("x")
            .with_help()
            .with_exit()
            .with_toggle_display()
            .with_login()
            .with_logout();
        assert!(result.show_help && result.exit && result.toggle_display);
        assert!(result.login && result.logout);
    }

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::AlreadyLoggedIn.to_string(),
            "You are already logged in."
        );
        assert_eq!(
            CommandError::LoginFailed.to_string(),
            "Login failed. Invalid username or password."
        );
        assert_eq!(CommandError::NotLoggedIn.to_string(), "You are not logged in.");
    }

    #[test]
    fn test_from_history_maps_exhaustion() {
        assert!(matches!(
            CommandError::from_history(crate::error::Error::NothingToUndo),
            CommandError::NothingToUndo
        ));
        assert!(matches!(
            CommandError::from_history(crate::error::Error::NothingToRedo),
            CommandError::NothingToRedo
        ));
        assert!(matches!(
            CommandError::from_history(crate::error::Error::person_not_found("x")),
            CommandError::Storage(_)
        ));
    }
}
