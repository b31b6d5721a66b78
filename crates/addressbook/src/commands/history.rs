//! Undo and redo.

use super::{Command, CommandContext, CommandError, CommandResult};

/// Reverts the most recent change.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndoCommand;

impl UndoCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "undo";
}

impl Command for UndoCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        let change = ctx
            .history
            .undo(ctx.workspace.model_mut())
            .map_err(CommandError::from_history)?;
        Ok(CommandResult::new(format!("Undone: {change}")))
    }
}

/// Reapplies the most recently undone change.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedoCommand;

impl RedoCommand {
    /// The keyword that identifies this command.
    pub const COMMAND_WORD: &'static str = "redo";
}

impl Command for RedoCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult, CommandError> {
        let change = ctx
            .history
            .redo(ctx.workspace.model_mut())
            .map_err(CommandError::from_history)?;
        Ok(CommandResult::new(format!("Redone: {change}")))
    }
}
