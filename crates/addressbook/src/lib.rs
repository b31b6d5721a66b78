//! `addressbook` - A multi-user address book with per-user storage
//!
//! This library provides accounts backed by a flat file, one JSON address book
//! and preferences file per user, and a command layer with undo and redo.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod account;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod logic;
pub mod manager;
pub mod model;
pub mod session;
pub mod storage;

pub use account::{Account, AccountList, PasswordHash, Username};
pub use config::Config;
pub use error::{Error, Result};
pub use history::{Change, CommandHistory};
pub use logging::init_logging;
pub use logic::LogicManager;
pub use manager::{AccountManager, Workspace};
pub use model::{AddressBook, Model, Person};
pub use session::Session;
pub use storage::{DataLayout, Storage};
