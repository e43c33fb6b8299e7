use std::path::Path;

use crate::archive;
use crate::command::{run_command, CommandOutput, CommandResult};
use crate::context::{CommandHistory, ShellContext};
use crate::error::ShellError;
use crate::tokenizer::tokenize;
use crate::vfs::VirtualFileSystem;

/// One executed line of a startup script.
#[derive(Debug)]
pub struct ScriptStep {
    /// 1-based line number in the script file.
    pub line_number: usize,
    pub line: String,
    /// Current directory at the moment the line ran, for prompt echo.
    pub cwd: String,
    pub result: CommandResult,
}

/// A single interactive session: filesystem, history and exit flag.
#[derive(Debug, Default)]
pub struct Shell {
    ctx: ShellContext,
    exited: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vfs(vfs: VirtualFileSystem) -> Self {
        Self {
            ctx: ShellContext::with_vfs(vfs),
            exited: false,
        }
    }

    /// Swap in a filesystem loaded from `path`. On failure the current
    /// filesystem stays exactly as it was.
    pub fn load_archive(&mut self, path: &Path) -> Result<(), ShellError> {
        let vfs = archive::load_from_path(path)?;
        self.ctx.vfs = vfs;
        tracing::info!(path = %path.display(), "vfs mounted");
        Ok(())
    }

    pub fn cwd(&self) -> &str {
        self.ctx.cwd()
    }

    pub fn vfs(&self) -> &VirtualFileSystem {
        &self.ctx.vfs
    }

    pub fn history(&self) -> &CommandHistory {
        &self.ctx.history
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Run an already tokenized command. History is not touched.
    pub fn execute(&mut self, tokens: &[String]) -> CommandResult {
        let result = run_command(tokens, &mut self.ctx);
        if matches!(result, Ok(CommandOutput { exit: true, .. })) {
            self.exited = true;
        }
        result
    }

    /// Tokenize and run one input line. Lines with at least one token are
    /// recorded in history before they run.
    pub fn execute_line(&mut self, line: &str) -> CommandResult {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(CommandOutput::empty());
        }
        self.ctx.history.push(line);
        self.execute(&tokens)
    }

    /// Replay a script file line by line.
    pub fn run_script(&mut self, path: &Path) -> Result<Vec<ScriptStep>, ShellError> {
        let source = std::fs::read_to_string(path).map_err(|source| ShellError::ScriptUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "running startup script");
        let steps = self.run_script_source(&source);
        tracing::info!(path = %path.display(), executed = steps.len(), "startup script finished");
        Ok(steps)
    }

    /// Execute every non-blank, non-comment line in order. A failing line is
    /// recorded in its step and the replay carries on.
    pub fn run_script_source(&mut self, source: &str) -> Vec<ScriptStep> {
        let mut steps = Vec::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let cwd = self.cwd().to_string();
            let result = self.execute_line(line);
            if let Err(err) = &result {
                tracing::warn!(line = idx + 1, error = %err, "script line failed");
            }
            steps.push(ScriptStep {
                line_number: idx + 1,
                line: line.to_string(),
                cwd,
                result,
            });
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_not_recorded() {
        let mut shell = Shell::new();
        shell.execute_line("ls").unwrap();
        shell.execute_line("   ").unwrap();
        shell.execute_line("cd /").unwrap();
        let out = shell.execute_line("history").unwrap();
        assert_eq!(out.lines, vec!["1  ls", "2  cd /", "3  history"]);
    }

    #[test]
    fn failed_commands_are_still_recorded() {
        let mut shell = Shell::new();
        assert!(shell.execute_line("nope").is_err());
        assert_eq!(shell.history().entries(), ["nope"]);
    }

    #[test]
    fn exit_sets_flag() {
        let mut shell = Shell::new();
        assert!(shell.execute_line("exit now").is_err());
        assert!(!shell.has_exited());
        assert!(shell.execute_line("exit").unwrap().exit);
        assert!(shell.has_exited());
    }

    #[test]
    fn script_skips_comments_and_continues_past_errors() {
        let mut shell = Shell::new();
        let steps = shell.run_script_source("# setup\n\ntouch a\ncd nowhere\n  echo done  \n");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].line_number, 3);
        assert!(steps[1].result.is_err());
        assert_eq!(steps[2].line, "echo done");
        assert_eq!(steps[2].result.as_ref().unwrap().lines, vec!["done"]);
        assert_eq!(shell.history().len(), 3);
    }

    #[test]
    fn script_steps_capture_cwd_before_running() {
        let mut vfs = VirtualFileSystem::new();
        vfs.ensure_dir_all("/docs");
        let mut shell = Shell::with_vfs(vfs);
        let steps = shell.run_script_source("cd docs\nls");
        assert_eq!(steps[0].cwd, "/");
        assert_eq!(steps[1].cwd, "/docs");
    }

    #[test]
    fn unreadable_script_is_reported() {
        let mut shell = Shell::new();
        let err = shell.run_script(Path::new("/no/such/script.sh")).unwrap_err();
        assert_eq!(err.code(), "SCRIPT_UNREADABLE");
    }

    #[test]
    fn failed_archive_load_keeps_existing_vfs() {
        let mut shell = Shell::new();
        shell.execute_line("touch keep").unwrap();
        assert!(shell.load_archive(Path::new("/no/such.zip")).is_err());
        assert!(shell.vfs().read_file("/keep").is_ok());
    }
}
