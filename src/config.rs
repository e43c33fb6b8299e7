use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::ShellError;

#[derive(Parser, Debug, Default)]
#[command(name = "vshell", version, about = "Shell emulator over a zip-backed virtual filesystem")]
pub struct CliArgs {
    /// Zip archive to load as the virtual filesystem
    #[arg(long = "vfs")]
    pub vfs: Option<PathBuf>,

    /// Script whose commands run before the interactive prompt
    #[arg(long = "script")]
    pub script: Option<PathBuf>,

    /// JSON config file providing `vfs_path` and `startup_script`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// On-disk JSON config. Both keys are optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub vfs_path: Option<PathBuf>,
    #[serde(default)]
    pub startup_script: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ShellError> {
        if !path.is_file() {
            return Err(ShellError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ShellError::Config(format!("cannot read config: {}", e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| ShellError::Config(format!("JSON decode error: {}", e)))
    }
}

/// Settings the session starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub archive_path: Option<PathBuf>,
    pub startup_script: Option<PathBuf>,
}

impl ShellConfig {
    /// Merge CLI flags over the optional config file.
    ///
    /// A broken config file is not fatal; its error comes back alongside the
    /// CLI-only settings so the caller can show it.
    pub fn resolve(cli: &CliArgs) -> (Self, Option<ShellError>) {
        let (file, error) = match cli.config.as_deref() {
            Some(path) => match FileConfig::load(path) {
                Ok(file) => (file, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
                    (FileConfig::default(), Some(err))
                }
            },
            None => (FileConfig::default(), None),
        };

        let config = Self {
            archive_path: cli.vfs.clone().or(file.vfs_path),
            startup_script: cli.script.clone().or(file.startup_script),
        };
        (config, error)
    }
}

/// Name of this machine for the prompt: kernel hostname, then `/etc/hostname`,
/// then `$HOSTNAME`.
pub fn host_name() -> String {
    ["/proc/sys/kernel/hostname", "/etc/hostname"]
        .iter()
        .filter_map(|p| std::fs::read_to_string(p).ok())
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
        .or_else(|| std::env::var("HOSTNAME").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "localhost".to_string())
}
