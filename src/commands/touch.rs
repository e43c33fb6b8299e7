use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// touch FILE...
/// Create each FILE as an empty file. A failing FILE does not stop the rest.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return Err(ShellError::InvalidArgumentCount(
                "touch: missing file operand".to_string(),
            ));
        }
        let mut output = CommandOutput::empty();
        for file in args {
            if let Err(err) = ctx.vfs.create_empty_file(file) {
                tracing::debug!(file = %file, error = %err, "touch failed");
                output.errors.push(ShellError::NotFound(format!(
                    "touch: cannot touch '{}': No such file or directory",
                    file
                )));
            }
        }
        Ok(output)
    }
}
