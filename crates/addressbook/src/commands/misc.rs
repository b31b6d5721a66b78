//! Commands that do not change the address book.

use super::{Command, CommandContext, CommandError, CommandResult};

/// Lists every person in the active address book.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommand;

impl ListCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        let book = ctx.workspace.model().address_book();
        if book.is_empty() {
            return Ok(CommandResult::new("The address book is empty."));
        }

        let lines: Vec<String> = book
            .persons()
            .iter()
            .enumerate()
            .map(|(index, person)| format!("{}. {person}", index + 1))
            .collect();
        Ok(CommandResult::new(format!(
            "Listed {} persons:\n{}",
            book.len(),
            lines.join("\n")
        )))
    }
}

/// Asks the presentation layer to show help.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "help";
}

impl Command for HelpCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new("Opened help window.").with_help())
    }
}

/// Asks the presentation layer to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "exit";
}

impl Command for ExitCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new("Exiting Address Book as requested ...").with_exit())
    }
}
