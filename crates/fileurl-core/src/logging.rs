//! Logging init: append to a file under the XDG state dir, or write to stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter for the log file when `RUST_LOG` is unset.
const FILE_FILTER: &str = "info,fileurl_core=debug,fileurl_cli=debug";
/// Filter for stderr; command output goes to stdout and should stay readable.
const STDERR_FILTER: &str = "warn";

/// Where log records end up after [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// `~/.local/state/<app>/<app>.log`.
pub fn log_path(app: &str) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(app)?;
    Ok(xdg_dirs
        .get_state_home()
        .join(app)
        .join(format!("{app}.log")))
}

/// Open `path` for appending, creating its directory first.
fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create dir: {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// With `to_file`, records are appended to [`log_path`] for `app`. If that file cannot
/// be opened the CLI still runs: logging falls back to stderr and the reason is logged
/// there as a warning.
pub fn init(app: &str, to_file: bool) -> LogSink {
    let opened = if to_file {
        log_path(app).and_then(|path| open_append(&path).map(|file| (path, file)))
    } else {
        Err(anyhow::anyhow!("file logging disabled in config"))
    };

    let builder = tracing_subscriber::fmt().with_ansi(false);
    match opened {
        Ok((path, file)) => {
            builder
                .with_env_filter(env_filter_or(FILE_FILTER))
                .with_writer(Mutex::new(file))
                .init();
            tracing::info!("{app} logging initialized at {}", path.display());
            LogSink::File(path)
        }
        Err(err) => {
            builder
                .with_env_filter(env_filter_or(STDERR_FILTER))
                .with_writer(io::stderr)
                .init();
            if to_file {
                tracing::warn!("logging to stderr: {:#}", err);
            }
            LogSink::Stderr
        }
    }
}
