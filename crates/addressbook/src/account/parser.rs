//! Text line format for account records.
//!
//! Each account occupies one line:
//!
//! ```text
//! username: alice | passwordHash: 5f4dcc3b5aa765d61d8327deb882cf99
//! ```

use tracing::warn;

use super::{Account, PasswordHash, Username};
use crate::error::{Error, Result};

const USERNAME_PREFIX: &str = "username: ";
const HASH_SEPARATOR: &str = " | passwordHash: ";

/// Converts between account records and their text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountParser;

impl AccountParser {
    /// Create a parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse every line into an account.
    ///
    /// Blank lines are ignored. Malformed lines are logged and skipped so a
    /// single bad record does not discard the rest of the file.
    #[must_use]
    pub fn parse_to_account<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Account> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.as_ref().trim().is_empty())
            .filter_map(|(index, line)| match self.parse_line(index + 1, line.as_ref()) {
                Ok(account) => Some(account),
                Err(e) => {
                    warn!("Skipping account record: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Parse a single line.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedAccountLine`] if the line does not follow the
    /// record format or carries an invalid username or an empty hash.
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Account> {
        let rest = line.strip_prefix(USERNAME_PREFIX).ok_or_else(|| {
            Error::malformed_account_line(line_number, "expected 'username: ' prefix")
        })?;

        let (username, hash) = rest.split_once(HASH_SEPARATOR).ok_or_else(|| {
            Error::malformed_account_line(line_number, "expected ' | passwordHash: ' separator")
        })?;

        if hash.is_empty() {
            return Err(Error::malformed_account_line(
                line_number,
                "password hash is empty",
            ));
        }

        let username = Username::new(username)
            .map_err(|e| Error::malformed_account_line(line_number, e.to_string()))?;

        Ok(Account::new(username, PasswordHash::new(hash)))
    }

    /// Render accounts back into text lines.
    #[must_use]
    pub fn parse_to_string<'a, I>(&self, accounts: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        accounts
            .into_iter()
            .map(|a| {
                format!(
                    "{USERNAME_PREFIX}{}{HASH_SEPARATOR}{}",
                    a.username(),
                    a.password_hash()
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_USERNAME: &str = "test";
    // md5 of "password"
    const TEST_PASSWORD_HASH: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

    fn test_line() -> String {
        format!("username: {TEST_USERNAME} | passwordHash: {TEST_PASSWORD_HASH}")
    }

    #[test]
    fn test_parse_to_account() {
        let accounts = AccountParser::new().parse_to_account(&[test_line()]);

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].username().as_str(), TEST_USERNAME);
        assert_eq!(accounts[0].password_hash().as_str(), TEST_PASSWORD_HASH);
    }

    #[test]
    fn test_parse_to_string() {
        let account = Account::new(
            Username::new(TEST_USERNAME).unwrap(),
            PasswordHash::new(TEST_PASSWORD_HASH),
        );
        let lines = AccountParser::new().parse_to_string([&account]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], test_line());
    }

    #[test]
    fn test_reparse_reproduces_account() {
        let parser = AccountParser::new();
        for hash in [TEST_PASSWORD_HASH, "x", "a | b", "passwordHash: nested", " padded "] {
            let line = format!("username: alice | passwordHash: {hash}");
            let first = parser.parse_to_account(&[line]);
            let rendered = parser.parse_to_string(&first);
            let second = parser.parse_to_account(&rendered);

            assert_eq!(first.len(), 1, "hash {hash:?}");
            assert_eq!(first, second, "hash {hash:?}");
            assert_eq!(second[0].password_hash().as_str(), hash);
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let lines = vec![String::new(), test_line(), "   ".to_string()];
        let accounts = AccountParser::new().parse_to_account(&lines);
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let lines = vec![
            "garbage".to_string(),
            test_line(),
            "username: bob".to_string(),
            "username: bob | passwordHash: ".to_string(),
            "username: ../root | passwordHash: abc".to_string(),
        ];
        let accounts = AccountParser::new().parse_to_account(&lines);

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].username().as_str(), TEST_USERNAME);
    }

    #[test]
    fn test_parse_line_reports_line_number() {
        let err = AccountParser::new()
            .parse_line(7, "passwordHash: abc")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedAccountLine { line_number: 7, .. }
        ));
    }

    #[test]
    fn test_parse_line_rejects_unsafe_username() {
        let err = AccountParser::new()
            .parse_line(1, "username: a/b | passwordHash: abc")
            .unwrap_err();
        assert!(err.to_string().contains("invalid username"));
    }
}
