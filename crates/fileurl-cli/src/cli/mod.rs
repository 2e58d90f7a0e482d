//! CLI for converting between local paths and `file://` URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fileurl_core::config::{self, FileurlConfig};
use fileurl_core::Mode;
use std::path::PathBuf;

use commands::{run_config_path, run_to_local, run_to_url};

/// Top-level CLI for fileurl.
#[derive(Debug, Parser)]
#[command(name = "fileurl")]
#[command(about = "Convert between local file paths and file:// URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/fileurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the file:// URL for each local path.
    ToUrl {
        /// POSIX (/usr/bin/vi) or drive-letter (c:/windows/notepad.exe) paths.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the local path for each file:// URL.
    ToLocal {
        /// URLs to convert; a drive letter in the host is kept as written.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Accept file://c:/path style URLs that put the drive letter in the host.
        #[arg(long, conflicts_with = "strict")]
        relaxed: bool,

        /// Treat every non-empty host as remote (overrides the configured default).
        #[arg(long)]
        strict: bool,
    },

    /// Print the location of the configuration file.
    ConfigPath,
}

impl Cli {
    /// Explicit `--config` file, or the XDG default (created on first use).
    pub fn load_config(&self) -> Result<FileurlConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_init(),
        }
    }
}

impl CliCommand {
    pub fn run(self, cfg: &FileurlConfig) -> Result<()> {
        match self {
            CliCommand::ToUrl { paths } => run_to_url(&paths)?,
            CliCommand::ToLocal {
                urls,
                relaxed,
                strict,
            } => run_to_local(&urls, select_mode(relaxed, strict, cfg))?,
            CliCommand::ConfigPath => run_config_path()?,
        }
        Ok(())
    }
}

/// Command-line flags win over the configured default.
fn select_mode(relaxed: bool, strict: bool, cfg: &FileurlConfig) -> Mode {
    if relaxed {
        Mode::Relaxed
    } else if strict {
        Mode::Strict
    } else {
        cfg.default_mode
    }
}

#[cfg(test)]
mod tests;
