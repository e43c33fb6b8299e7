use crate::vfs::VirtualFileSystem;

/// Append-only record of executed command lines.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `"<n>  <line>"`, numbered from 1.
    pub fn numbered(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}  {}", i + 1, cmd))
            .collect()
    }
}

/// State a builtin can see: the filesystem and the session history.
#[derive(Debug, Clone, Default)]
pub struct ShellContext {
    pub vfs: VirtualFileSystem,
    pub history: CommandHistory,
}

impl ShellContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vfs(vfs: VirtualFileSystem) -> Self {
        Self {
            vfs,
            history: CommandHistory::new(),
        }
    }

    pub fn cwd(&self) -> &str {
        self.vfs.cwd()
    }
}
