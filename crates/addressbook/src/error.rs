//! Error types for addressbook.
//!
//! This module defines the library-level error type shared by the account,
//! model, and storage layers. Command-level failures that are shown to the user
//! live in [`crate::commands::CommandError`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for addressbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Account Errors ===
    /// A username failed validation.
    #[error("invalid username '{username}': {reason}")]
    InvalidUsername {
        /// The rejected username.
        username: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A line in the accounts file could not be parsed.
    #[error("malformed account record on line {line_number}: {message}")]
    MalformedAccountLine {
        /// 1-based line number within the accounts file.
        line_number: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// An account with this username already exists.
    #[error("an account named '{username}' already exists")]
    DuplicateAccount {
        /// The clashing username.
        username: String,
    },

    /// The accounts file exists but could not be loaded this session.
    #[error("accounts file at {path} could not be loaded; refusing to overwrite it")]
    AccountsUnavailable {
        /// Path to the accounts file.
        path: PathBuf,
    },

    // === Model Errors ===
    /// A person with this id is already in the address book.
    #[error("a person with id '{id}' already exists in the address book")]
    DuplicatePerson {
        /// The clashing person id.
        id: String,
    },

    /// No person with this id is in the address book.
    #[error("no person with id '{id}' in the address book")]
    PersonNotFound {
        /// The missing person id.
        id: String,
    },

    // === History Errors ===
    /// There is no executed change left to undo.
    #[error("nothing to undo")]
    NothingToUndo,

    /// There is no undone change left to redo.
    #[error("nothing to redo")]
    NothingToRedo,

    // === Storage Errors ===
    /// A data file exists but could not be read or parsed.
    #[error("data file at {path} could not be loaded: {message}")]
    DataLoading {
        /// Path to the data file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// A data file could not be written.
    #[error("failed to save {path}: {source}")]
    DataSaving {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for addressbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid username error.
    #[must_use]
    pub fn invalid_username(username: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidUsername {
            username: username.into(),
            reason,
        }
    }

    /// Create a malformed account line error.
    #[must_use]
    pub fn malformed_account_line(line_number: usize, message: impl Into<String>) -> Self {
        Self::MalformedAccountLine {
            line_number,
            message: message.into(),
        }
    }

    /// Create a data loading error for the given file.
    #[must_use]
    pub fn data_loading(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataLoading {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a person-not-found error.
    #[must_use]
    pub fn person_not_found(id: impl Into<String>) -> Self {
        Self::PersonNotFound { id: id.into() }
    }

    /// Check if this error means a data file is present but unusable.
    #[must_use]
    pub fn is_data_loading(&self) -> bool {
        matches!(self, Self::DataLoading { .. })
    }
}
