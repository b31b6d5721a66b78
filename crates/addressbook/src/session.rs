//! The login session.

use crate::account::Account;

/// Who, if anyone, is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is logged in; the shared default data is active.
    #[default]
    LoggedOut,
    /// An account is logged in and its own data is active.
    LoggedIn(Account),
}

impl Session {
    /// Whether an account is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// The logged-in account, if any.
    #[must_use]
    pub fn current_account(&self) -> Option<&Account> {
        match self {
            Self::LoggedIn(account) => Some(account),
            Self::LoggedOut => None,
        }
    }

    /// Record `account` as logged in, returning the account it replaced.
    pub fn log_in(&mut self, account: Account) -> Option<Account> {
        match std::mem::replace(self, Self::LoggedIn(account)) {
            Self::LoggedIn(previous) => Some(previous),
            Self::LoggedOut => None,
        }
    }

    /// End the session, returning the account that was logged in.
    pub fn log_out(&mut self) -> Option<Account> {
        match std::mem::take(self) {
            Self::LoggedIn(previous) => Some(previous),
            Self::LoggedOut => None,
        }
    }
}
