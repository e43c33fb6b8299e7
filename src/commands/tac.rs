use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// tac FILE
/// Print the lines of FILE last to first.
pub struct TacCommand;

impl Command for TacCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let [file] = args else {
            return Err(ShellError::InvalidArgumentCount(
                "tac: wrong number of arguments".to_string(),
            ));
        };
        // read_file reports missing and binary files alike
        let content = ctx.vfs.read_file(file).map_err(|_| {
            ShellError::NotFound(format!("tac: {}: No such file or file is binary", file))
        })?;

        let reversed: Vec<&str> = content.trim().split('\n').rev().collect();
        Ok(CommandOutput::line(reversed.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileContent;

    fn ctx_with(path: &str, content: FileContent) -> ShellContext {
        let mut ctx = ShellContext::new();
        ctx.vfs.insert_file(path, content).unwrap();
        ctx
    }

    #[test]
    fn reverses_lines() {
        let mut ctx = ctx_with("/f.txt", FileContent::Text("a\nb\nc".to_string()));
        let out = TacCommand.execute(&["f.txt".to_string()], &mut ctx).unwrap();
        assert_eq!(out.lines, vec!["c\nb\na"]);
    }

    #[test]
    fn trims_surrounding_blank_lines() {
        let mut ctx = ctx_with("/f.txt", FileContent::Text("\n\none\ntwo\n\n".to_string()));
        let out = TacCommand.execute(&["/f.txt".to_string()], &mut ctx).unwrap();
        assert_eq!(out.lines, vec!["two\none"]);
    }

    #[test]
    fn empty_file_prints_blank_line() {
        let mut ctx = ctx_with("/empty", FileContent::Text(String::new()));
        let out = TacCommand.execute(&["empty".to_string()], &mut ctx).unwrap();
        assert_eq!(out.lines, vec![""]);
    }

    #[test]
    fn binary_and_missing_share_error() {
        let mut ctx = ctx_with("/blob", FileContent::from_bytes(vec![0xc3, 0x28]));
        let binary = TacCommand.execute(&["blob".to_string()], &mut ctx).unwrap_err();
        let missing = TacCommand.execute(&["nope".to_string()], &mut ctx).unwrap_err();
        assert_eq!(binary.to_string(), "tac: blob: No such file or file is binary");
        assert_eq!(missing.to_string(), "tac: nope: No such file or file is binary");
        assert_eq!(binary.code(), missing.code());
    }

    #[test]
    fn needs_exactly_one_argument() {
        let mut ctx = ShellContext::new();
        let err = TacCommand.execute(&[], &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "tac: wrong number of arguments");
        let two = vec!["a".to_string(), "b".to_string()];
        assert!(TacCommand.execute(&two, &mut ctx).is_err());
    }
}
