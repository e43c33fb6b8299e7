use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// exit
/// End the session. Takes no arguments.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        if !args.is_empty() {
            return Err(ShellError::InvalidArgumentCount(
                "exit: too many arguments".to_string(),
            ));
        }
        Ok(CommandOutput::exit())
    }
}
