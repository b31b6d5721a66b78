//! Commands that change the address book.
//!
//! Each one records a [`Change`] so it can be undone.

use std::collections::BTreeSet;

use super::{Command, CommandContext, CommandError, CommandResult};
use crate::error::Error;
use crate::history::Change;
use crate::model::Person;

/// Adds a person.
#[derive(Debug, Clone)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "add";

    /// Create a command adding `person`.
    #[must_use]
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    /// The person this command adds.
    #[must_use]
    pub fn person_to_add(&self) -> &Person {
        &self.person
    }
}

impl Command for AddCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        ctx.workspace.model_mut().add_person(self.person.clone())?;
        ctx.history.record(Change::Add {
            person: self.person.clone(),
        });
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

/// Deletes a person by id.
#[derive(Debug, Clone)]
pub struct DeleteCommand {
    id: String,
}

impl DeleteCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "delete";

    /// Create a command deleting the person with `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for DeleteCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        let model = ctx.workspace.model_mut();
        let target = model
            .address_book()
            .find_by_id(&self.id)
            .cloned()
            .ok_or_else(|| Error::person_not_found(&self.id))?;

        let deleted = model.delete_person(&target)?;
        let feedback = format!("Deleted Person: {deleted}");
        ctx.history.record(Change::Delete { person: deleted });
        Ok(CommandResult::new(feedback))
    }
}

/// Field updates applied by [`EditCommand`]. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEdit {
    /// New name.
    pub name: Option<String>,
    /// New id.
    pub id: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// Replacement tag set.
    pub tags: Option<BTreeSet<String>>,
}

impl PersonEdit {
    /// Whether no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.phone.is_none() && self.tags.is_none()
    }

    /// Apply the updates to a copy of `person`.
    #[must_use]
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            id: self.id.clone().unwrap_or_else(|| person.id.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

/// Edits a person by id.
#[derive(Debug, Clone)]
pub struct EditCommand {
    id: String,
    edit: PersonEdit,
}

impl EditCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "edit";

    /// Create a command applying `edit` to the person with `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, edit: PersonEdit) -> Self {
        Self {
            id: id.into(),
            edit,
        }
    }
}

impl Command for EditCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        if self.edit.is_empty() {
            return Err(CommandError::InvalidArguments(
                "at least one field to edit must be provided".to_string(),
            ));
        }

        let model = ctx.workspace.model_mut();
        let before = model
            .address_book()
            .find_by_id(&self.id)
            .cloned()
            .ok_or_else(|| Error::person_not_found(&self.id))?;
        let after = self.edit.apply_to(&before);

        model.set_person(&before, after.clone())?;
        let feedback = format!("Edited Person: {after}");
        ctx.history.record(Change::Edit { before, after });
        Ok(CommandResult::new(feedback))
    }
}

/// Removes every person.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearCommand;

impl ClearCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Command for ClearCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        let before = ctx
            .workspace
            .model_mut()
            .set_address_book(crate::model::AddressBook::new());
        ctx.history.record(Change::Clear { before });
        Ok(CommandResult::new("Address book has been cleared!"))
    }
}
