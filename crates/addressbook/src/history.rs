//! Undo/redo history of address book changes.
//!
//! Every mutating command records a [`Change`] describing what it did. The
//! [`CommandHistory`] keeps these in order with a cursor separating changes
//! that are in effect from changes that have been undone. Recording a new
//! change after an undo discards the undone tail.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{AddressBook, Model, Person};

/// A single reversible mutation of the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A person was added.
    Add {
        /// The person that was added.
        person: Person,
    },
    /// A person was deleted.
    Delete {
        /// The person that was deleted.
        person: Person,
    },
    /// A person was edited.
    Edit {
        /// The record before the edit.
        before: Person,
        /// The record after the edit.
        after: Person,
    },
    /// The address book was cleared.
    Clear {
        /// The address book before it was cleared.
        before: AddressBook,
    },
}

impl Change {
    /// Undo this change against `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model no longer matches the state this change
    /// left it in.
    pub fn revert(&self, model: &mut Model) -> Result<()> {
        match self {
            Self::Add { person } => model.delete_person(person).map(drop),
            Self::Delete { person } => model.add_person(person.clone()),
            Self::Edit { before, after } => model.set_person(after, before.clone()),
            Self::Clear { before } => {
                model.set_address_book(before.clone());
                Ok(())
            }
        }
    }

    /// Apply this change again against `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model no longer matches the state this change
    /// was undone to.
    pub fn reapply(&self, model: &mut Model) -> Result<()> {
        match self {
            Self::Add { person } => model.add_person(person.clone()),
            Self::Delete { person } => model.delete_person(person).map(drop),
            Self::Edit { before, after } => model.set_person(before, after.clone()),
            Self::Clear { .. } => {
                model.set_address_book(AddressBook::new());
                Ok(())
            }
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { person } => write!(f, "add {}", person.id),
            Self::Delete { person } => write!(f, "delete {}", person.id),
            Self::Edit { before, .. } => write!(f, "edit {}", before.id),
            Self::Clear { before } => write!(f, "clear ({} persons)", before.len()),
        }
    }
}

/// Linear undo/redo log.
///
/// `done` counts the changes currently in effect; it never exceeds the
/// number of recorded changes.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    changes: Vec<Change>,
    done: usize,
}

impl CommandHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change that has just been applied.
    ///
    /// Any undone changes beyond the cursor are discarded first.
    pub fn record(&mut self, change: Change) {
        if self.changes.len() > self.done {
            debug!(
                "Discarding {} undone changes",
                self.changes.len() - self.done
            );
            self.changes.truncate(self.done);
        }
        self.changes.push(change);
        self.done += 1;
    }

    /// Whether there is a change to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.done > 0
    }

    /// Whether there is an undone change to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.changes.len() > self.done
    }

    /// Index of the most recent change in effect, or `None` if nothing is.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.done.checked_sub(1)
    }

    /// Number of recorded changes, including undone ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Revert the most recent change in effect.
    ///
    /// The cursor only moves if the revert succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToUndo`] if there is nothing to undo, or the
    /// model error if the change cannot be reverted.
    pub fn undo(&mut self, model: &mut Model) -> Result<&Change> {
        let index = self.current_index().ok_or(Error::NothingToUndo)?;
        let change = &self.changes[index];
        change.revert(model)?;
        self.done -= 1;
        debug!("Undid {}", change);
        Ok(change)
    }

    /// Reapply the most recently undone change.
    ///
    /// The cursor only moves if the change applies cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToRedo`] if there is nothing to redo, or the
    /// model error if the change cannot be reapplied.
    pub fn redo(&mut self, model: &mut Model) -> Result<&Change> {
        if !self.can_redo() {
            return Err(Error::NothingToRedo);
        }
        let change = &self.changes[self.done];
        change.reapply(model)?;
        self.done += 1;
        debug!("Redid {}", change);
        Ok(change)
    }

    /// Forget every recorded change.
    pub fn clear(&mut self) {
        self.changes.clear();
        self.done = 0;
    }
}
