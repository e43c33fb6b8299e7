use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// cd DIR
/// Change the current directory. Exactly one argument; no `cd` to home.
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let target = match args {
            [] => {
                return Err(ShellError::InvalidArgumentCount(
                    "cd: missing argument".to_string(),
                ))
            }
            [target] => target,
            _ => {
                return Err(ShellError::InvalidArgumentCount(
                    "cd: too many arguments".to_string(),
                ))
            }
        };

        ctx.vfs
            .change_dir(target)
            .map_err(|_| ShellError::NotFound(format!("cd: no such directory: {}", target)))?;
        Ok(CommandOutput::empty())
    }
}
