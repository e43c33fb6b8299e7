use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    // extra arguments are ignored
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> CommandResult {
        Ok(CommandOutput::lines(ctx.history.numbered()))
    }
}
