use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by [`crate::vfs::VirtualFileSystem`] operations.
///
/// Each variant carries the canonical path the operation resolved to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no such directory: {0}")]
    NoSuchDirectory(String),
    #[error("parent directory not found: {0}")]
    ParentNotFound(String),
    #[error("is a directory: {0}")]
    IsDirectory(String),
}

/// Errors surfaced to the presentation layer.
///
/// Command variants hold the full shell-style message so the caller can print
/// them verbatim.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgumentCount(String),
    #[error("{0}: command not found")]
    UnknownCommand(String),
    #[error("invalid or corrupted zip archive: {0}")]
    ArchiveCorrupt(#[from] zip::result::ZipError),
    #[error("VFS archive not found: {}", .0.display())]
    ArchiveMissing(PathBuf),
    #[error("cannot read startup script '{}': {source}", .path.display())]
    ScriptUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Machine-readable code for this error variant.
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidArgumentCount(_) => "INVALID_ARGUMENT_COUNT",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
            Self::ArchiveCorrupt(_) => "ARCHIVE_CORRUPT",
            Self::ArchiveMissing(_) => "ARCHIVE_MISSING",
            Self::ScriptUnreadable { .. } => "SCRIPT_UNREADABLE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}
