use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// ls [DIR]
/// List the entries of DIR (the current directory by default), one per line.
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        // extra arguments are ignored
        let target = args.first().map(String::as_str).unwrap_or(".");
        let entries = ctx.vfs.list_dir(target).map_err(|_| {
            ShellError::NotFound(format!(
                "ls: cannot access '{}': No such file or directory",
                target
            ))
        })?;

        // an empty directory still prints one (blank) line
        if entries.is_empty() {
            return Ok(CommandOutput::line(""));
        }
        Ok(CommandOutput::lines(entries))
    }
}
