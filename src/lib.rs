// shell emulator over an in-memory filesystem
// the tree is loaded once from a zip archive, then poked at with a handful of builtins
pub mod archive;
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod path;
pub mod shell;
pub mod tokenizer;
pub mod vfs;

pub use command::{Builtin, CommandOutput, CommandResult};
pub use config::{host_name, CliArgs, ShellConfig};
pub use context::{CommandHistory, ShellContext};
pub use error::{ShellError, VfsError};
pub use shell::{ScriptStep, Shell};
pub use tokenizer::tokenize;
pub use vfs::{FileContent, VfsNode, VirtualFileSystem};
