//! Account manager: login, logout and per-user storage switching.
//!
//! The manager owns the account list and the [`Session`]. Logging in or out
//! produces a fresh [`Workspace`] bound to the right files, which the logic
//! layer installs in place of the previous one.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::account::{Account, AccountList, AccountParser, AccountStore, PasswordHash, Username};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{sample, AddressBook, Model, UserPrefs};
use crate::session::Session;
use crate::storage::{DataLayout, JsonAddressBookStorage, JsonUserPrefsStorage, Storage};

/// A loaded model together with the storage it persists to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    model: Model,
    storage: Storage,
}

impl Workspace {
    /// Pair a model with its storage.
    #[must_use]
    pub fn new(model: Model, storage: Storage) -> Self {
        Self { model, storage }
    }

    /// The active model.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Mutable access to the active model.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// The storage bound to the active model.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Persist the current address book.
    ///
    /// # Errors
    ///
    /// Returns an error if the address book file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.storage.save_address_book(self.model.address_book())
    }
}

/// Manages accounts and the current login session.
#[derive(Debug)]
pub struct AccountManager {
    accounts: AccountList,
    store: AccountStore,
    parser: AccountParser,
    layout: DataLayout,
    session: Session,
    sample_data: bool,
    /// Set when the accounts file exists but failed to load.
    store_unavailable: bool,
}

impl AccountManager {
    /// Create a manager from configuration, loading the accounts file.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_store(
            AccountStore::new(config.storage.accounts_file.clone()),
            config.data_layout(),
            config.session.sample_data_on_first_login,
        )
    }

    /// Create a manager over an explicit store and layout.
    ///
    /// A missing accounts file starts an empty list. An unreadable one also
    /// starts empty, but [`register`](Self::register) will then refuse to
    /// overwrite it.
    #[must_use]
    pub fn with_store(store: AccountStore, layout: DataLayout, sample_data: bool) -> Self {
        let parser = AccountParser::new();
        let mut accounts = AccountList::new();
        let mut store_unavailable = false;

        match store.load() {
            Ok(lines) => {
                for account in parser.parse_to_account(&lines) {
                    if let Err(e) = accounts.add(account) {
                        warn!("Ignoring account record in {}: {}", store.path().display(), e);
                    }
                }
                info!(
                    "Loaded {} accounts from {}",
                    accounts.len(),
                    store.path().display()
                );
            }
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No accounts file at {}; starting with no accounts",
                    store.path().display()
                );
            }
            Err(e) => {
                warn!(
                    "Accounts file at {} could not be loaded ({}). Starting with no accounts.",
                    store.path().display(),
                    e
                );
                store_unavailable = true;
            }
        }

        Self {
            accounts,
            store,
            parser,
            layout,
            session: Session::default(),
            sample_data,
            store_unavailable,
        }
    }

    /// All known accounts.
    #[must_use]
    pub fn account_list(&self) -> &AccountList {
        &self.accounts
    }

    /// Whether an account is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The logged-in account, if any.
    #[must_use]
    pub fn current_account(&self) -> Option<&Account> {
        self.session.current_account()
    }

    /// The file layout used for per-user data.
    #[must_use]
    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Log in `account` and load its workspace.
    pub fn login(&mut self, account: Account) -> Workspace {
        let username = account.username().clone();
        if let Some(previous) = self.session.log_in(account) {
            debug!("Replacing session for {}", previous.username());
        }
        info!("Logged in as {}", username);
        self.user_workspace(&username)
    }

    /// Log out and load the shared default workspace.
    pub fn logout(&mut self) -> Workspace {
        if let Some(previous) = self.session.log_out() {
            info!("Logged out {}", previous.username());
        }
        self.shared_workspace()
    }

    /// Register a new account and flush the accounts file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAccount`] if the username is taken,
    /// [`Error::AccountsUnavailable`] if the accounts file failed to load this
    /// session, or a storage error if it cannot be written.
    pub fn register(&mut self, username: Username, password_hash: PasswordHash) -> Result<()> {
        if self.store_unavailable {
            return Err(Error::AccountsUnavailable {
                path: self.store.path().to_path_buf(),
            });
        }
        if self.accounts.find(&username).is_some() {
            return Err(Error::DuplicateAccount {
                username: username.to_string(),
            });
        }

        let account = Account::new(username, password_hash);
        let mut lines = self.parser.parse_to_string(&self.accounts);
        lines.extend(self.parser.parse_to_string([&account]));
        self.store.save(&lines)?;

        info!("Registered account {}", account.username());
        self.accounts.add(account)
    }

    /// The workspace used while nobody is logged in.
    #[must_use]
    pub fn shared_workspace(&self) -> Workspace {
        let prefs_storage = JsonUserPrefsStorage::new(self.layout.shared_preferences_file());
        let prefs = load_user_prefs(&prefs_storage, self.layout.default_address_book_file());

        let storage = Storage::new(
            JsonAddressBookStorage::new(prefs.address_book_file_path()),
            prefs_storage,
        );
        let address_book = self.load_address_book(&storage);
        Workspace::new(Model::new(address_book, prefs), storage)
    }

    fn user_workspace(&self, username: &Username) -> Workspace {
        let prefs_storage = JsonUserPrefsStorage::new(self.layout.user_preferences_file(username));
        let address_book_file = self.layout.user_address_book_file(username);

        let mut prefs = load_user_prefs(&prefs_storage, &address_book_file);
        // The user's prefs always point at the user's own address book.
        prefs.set_address_book_file_path(&address_book_file);

        let storage = Storage::new(JsonAddressBookStorage::new(address_book_file), prefs_storage);
        if let Err(e) = storage.save_user_prefs(&prefs) {
            warn!("Failed to save preferences file: {}", e);
        }
        let address_book = self.load_address_book(&storage);
        info!(
            "Workspace for {} uses {}",
            username,
            storage.address_book_file_path().display()
        );
        Workspace::new(Model::new(address_book, prefs), storage)
    }

    fn load_address_book(&self, storage: &Storage) -> AddressBook {
        let path = storage.address_book_file_path();
        info!("Using data file: {}", path.display());

        match storage.read_address_book() {
            Ok(Some(address_book)) => address_book,
            Ok(None) if self.sample_data => {
                info!(
                    "Data file {} not found; starting with a sample address book",
                    path.display()
                );
                sample::sample_address_book()
            }
            Ok(None) => {
                info!(
                    "Data file {} not found; starting with an empty address book",
                    path.display()
                );
                AddressBook::new()
            }
            Err(e) => {
                warn!("{}. Will be starting with an empty address book.", e);
                AddressBook::new()
            }
        }
    }
}

/// Load preferences, falling back to ones pointing at `default_address_book`.
fn load_user_prefs(storage: &JsonUserPrefsStorage, default_address_book: &Path) -> UserPrefs {
    info!("Using preference file: {}", storage.path().display());

    match storage.read() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!("Creating new preference file {}", storage.path().display());
            UserPrefs::new(default_address_book)
        }
        Err(e) => {
            warn!("{}. Using default preferences.", e);
            UserPrefs::new(default_address_book)
        }
    }
}
