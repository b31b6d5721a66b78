//! Command execution against the active workspace.

use tracing::{debug, info, warn};

use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::config::Config;
use crate::history::CommandHistory;
use crate::manager::{AccountManager, Workspace};

/// Runs commands and keeps the active address book persisted.
///
/// Starts logged out, on the shared default workspace.
#[derive(Debug)]
pub struct LogicManager {
    accounts: AccountManager,
    workspace: Workspace,
    history: CommandHistory,
}

impl LogicManager {
    /// Create the logic layer from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_accounts(AccountManager::new(config))
    }

    /// Create the logic layer around an existing account manager.
    #[must_use]
    pub fn with_accounts(accounts: AccountManager) -> Self {
        let workspace = accounts.shared_workspace();
        Self {
            accounts,
            workspace,
            history: CommandHistory::new(),
        }
    }

    /// Execute a command, then save the active address book.
    ///
    /// A failed save is logged and does not fail the command: the change is
    /// already applied and recorded, and the next successful save writes it.
    ///
    /// # Errors
    ///
    /// Returns the command's error.
    pub fn execute(&mut self, command: &dyn Command) -> Result<CommandResult, CommandError> {
        info!("Executing command: {}", command.word());
        debug!("Command details: {:?}", command);

        let mut ctx = CommandContext {
            workspace: &mut self.workspace,
            accounts: &mut self.accounts,
            history: &mut self.history,
        };
        let result = command.execute(&mut ctx)?;

        if let Err(e) = self.workspace.save() {
            warn!("Failed to save address book: {}", e);
        }
        Ok(result)
    }

    /// The active workspace.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// The account manager.
    #[must_use]
    pub fn accounts(&self) -> &AccountManager {
        &self.accounts
    }

    /// The undo/redo history of the active workspace.
    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{PasswordHash, Username};
    use crate::commands::{AddCommand, LoginCommand, LogoutCommand, UndoCommand};
    use crate::model::{AddressBook, Person};
    use crate::storage::JsonAddressBookStorage;

    const TEST_HASH: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

    fn config(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::default();
        config.storage.accounts_file = dir.path().join("accounts.txt");
        config.storage.data_dir = dir.path().join("data");
        config.storage.preferences_file = dir.path().join("preferences.json");
        config.storage.default_address_book_file = dir.path().join("data").join("addressbook.json");
        std::fs::write(
            &config.storage.accounts_file,
            format!("username: test | passwordHash: {TEST_HASH}\n"),
        )
        .unwrap();
        config
    }

    fn login() -> LoginCommand {
        LoginCommand::new(Username::new("test").unwrap(), PasswordHash::new(TEST_HASH))
    }

    fn person() -> Person {
        Person::new("Per Son", "p1", "123", Vec::<String>::new())
    }

    fn read(path: &std::path::Path) -> AddressBook {
        JsonAddressBookStorage::new(path).read().unwrap().unwrap()
    }

    #[test]
    fn test_starts_logged_out_on_shared_data() {
        let dir = tempfile::tempdir().unwrap();
        let logic = LogicManager::new(&config(&dir));

        assert!(!logic.accounts().is_logged_in());
        assert_eq!(
            logic.workspace().storage().address_book_file_path(),
            dir.path().join("data").join("addressbook.json")
        );
    }

    #[test]
    fn test_execute_saves_address_book() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = LogicManager::new(&config(&dir));

        logic.execute(&AddCommand::new(person())).unwrap();

        let saved = read(&dir.path().join("data").join("addressbook.json"));
        assert!(saved.contains(&person()));
    }

    #[test]
    fn test_user_data_is_separate_from_shared_data() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = LogicManager::new(&config(&dir));

        logic.execute(&login()).unwrap();
        logic.execute(&AddCommand::new(person())).unwrap();
        logic.execute(&LogoutCommand).unwrap();

        let user_book = read(&dir.path().join("data").join("testAddressBook.json"));
        let shared_book = read(&dir.path().join("data").join("addressbook.json"));
        assert!(user_book.contains(&person()));
        assert!(!shared_book.contains(&person()));
        assert!(!logic.workspace().model().has_person(&person()));
    }

    #[test]
    fn test_undo_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = LogicManager::new(&config(&dir));

        logic.execute(&AddCommand::new(person())).unwrap();
        logic.execute(&UndoCommand).unwrap();

        let saved = read(&dir.path().join("data").join("addressbook.json"));
        assert!(!saved.contains(&person()));
        assert!(logic.history().can_redo());
    }

    #[test]
    fn test_save_failure_keeps_command_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir);
        // A regular file where the data directory should be blocks every write.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        config.storage.default_address_book_file = blocker.join("addressbook.json");
        let mut logic = LogicManager::new(&config);

        let result = logic.execute(&AddCommand::new(person())).unwrap();

        assert!(result.feedback().starts_with("New person added:"));
        assert!(logic.workspace().model().has_person(&person()));
        assert!(logic.history().can_undo());
        assert!(!blocker.join("addressbook.json").exists());

        logic.execute(&UndoCommand).unwrap();
        assert!(!logic.workspace().model().has_person(&person()));
    }

    #[test]
    fn test_failed_command_does_not_change_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = LogicManager::new(&config(&dir));

        let err = logic.execute(&LogoutCommand).unwrap_err();
        assert!(matches!(err, CommandError::NotLoggedIn));
        assert!(logic.history().is_empty());
    }
}
