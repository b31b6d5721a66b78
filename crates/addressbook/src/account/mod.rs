//! User accounts for addressbook.
//!
//! An account is a username paired with an opaque password hash. Accounts are
//! kept in an in-memory [`AccountList`], loaded from and flushed to a flat text
//! file by [`AccountStore`] using the line format handled by [`AccountParser`].

mod parser;
mod store;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

pub use parser::AccountParser;
pub use store::AccountStore;

/// Usernames namespace files under the data directory, so only a conservative
/// character set is accepted.
static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").expect("valid username regex"));

/// A validated username.
///
/// Usernames are safe to embed in a file name: ASCII letters, digits, `_`,
/// `-` and `.`, at most 64 characters, and never `.` or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUsername`] if the name is empty, too long,
    /// contains characters outside the allowed set, or is a relative path
    /// component.
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if username.is_empty() {
            return Err(Error::invalid_username(username, "must not be empty"));
        }
        if username == "." || username == ".." {
            return Err(Error::invalid_username(
                username,
                "must not be a relative path component",
            ));
        }
        if !USERNAME_PATTERN.is_match(&username) {
            return Err(Error::invalid_username(
                username,
                "only letters, digits, '_', '-' and '.' are allowed (max 64)",
            ));
        }
        Ok(Self(username))
    }

    /// The username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An opaque password hash, compared by equality only.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already-computed hash.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Hash a plaintext password with BLAKE3.
    #[must_use]
    pub fn from_plaintext(password: &str) -> Self {
        Self(blake3::hash(password.as_bytes()).to_hex().to_string())
    }

    /// The hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep hashes out of debug logs.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// A login account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: Username,
    password_hash: PasswordHash,
}

impl Account {
    /// Create an account from its parts.
    #[must_use]
    pub fn new(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    /// The account's username.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The account's password hash.
    #[must_use]
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// Ordered collection of accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountList {
    accounts: Vec<Account>,
}

impl AccountList {
    /// Create an empty account list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAccount`] if the username is already taken.
    pub fn add(&mut self, account: Account) -> Result<()> {
        if self.find(account.username()).is_some() {
            return Err(Error::DuplicateAccount {
                username: account.username().to_string(),
            });
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Find the account matching both username and password hash.
    #[must_use]
    pub fn authenticate(
        &self,
        username: &Username,
        password_hash: &PasswordHash,
    ) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.username() == username && a.password_hash() == password_hash)
    }

    /// Find an account by username alone.
    #[must_use]
    pub fn find(&self, username: &Username) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username() == username)
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether there are no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterate over accounts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }
}

impl<'a> IntoIterator for &'a AccountList {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
