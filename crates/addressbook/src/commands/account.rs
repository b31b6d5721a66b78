//! Login and logout.

use tracing::{info, warn};

use super::{Command, CommandContext, CommandError, CommandResult};
use crate::account::{PasswordHash, Username};

/// Logs a user in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: Username,
    password_hash: PasswordHash,
}

impl LoginCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "login";

    /// Usage shown to the user.
    pub const MESSAGE_USAGE: &'static str = "login: Logs in the user. \
        Parameters: --username USERNAME --password PASSWORD\n\
        Example: login --username john1234 --password qweasd123";

    /// Feedback on success.
    pub const MESSAGE_LOGIN_SUCCESS: &'static str = "Login successful.";

    /// Create a login attempt for the given credentials.
    #[must_use]
    pub fn new(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            username,
            password_hash,
        }
    }
}

impl Command for LoginCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        if ctx.accounts.is_logged_in() {
            return Err(CommandError::AlreadyLoggedIn);
        }

        let Some(account) = ctx
            .accounts
            .account_list()
            .authenticate(&self.username, &self.password_hash)
            .cloned()
        else {
            warn!("Failed login attempt for {}", self.username);
            return Err(CommandError::LoginFailed);
        };

        let workspace = ctx.accounts.login(account);
        ctx.switch_workspace(workspace);
        Ok(CommandResult::new(Self::MESSAGE_LOGIN_SUCCESS).with_login())
    }
}

/// Logs the current user out.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutCommand;

impl LogoutCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "logout";

    /// Feedback on success.
    pub const MESSAGE_LOGOUT_SUCCESS: &'static str = "Logout successful.";
}

impl Command for LogoutCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        if !ctx.accounts.is_logged_in() {
            return Err(CommandError::NotLoggedIn);
        }

        let workspace = ctx.accounts.logout();
        info!(
            "Switched to shared data file {}",
            workspace.storage().address_book_file_path().display()
        );
        ctx.switch_workspace(workspace);
        Ok(CommandResult::new(Self::MESSAGE_LOGOUT_SUCCESS).with_logout())
    }
}
