use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;

/// echo [STRING]...
/// Write the arguments separated by single spaces.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok(CommandOutput::line(args.join(" ")))
    }
}
