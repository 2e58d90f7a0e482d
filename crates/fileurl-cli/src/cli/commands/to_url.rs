//! To-url command: local paths to file:// URLs.

use anyhow::{Context, Result};
use fileurl_core::local_to_url;
use std::io::{self, Write};

/// Print one URL per path; stops at the first path that cannot be converted.
pub fn run_to_url(paths: &[String]) -> Result<()> {
    let stdout = io::stdout();
    write_urls(&mut stdout.lock(), paths)
}

pub(crate) fn write_urls<W: Write>(out: &mut W, paths: &[String]) -> Result<()> {
    for path in paths {
        let url = local_to_url(path).with_context(|| format!("cannot convert path {path:?}"))?;
        tracing::debug!(%path, %url, "converted local path");
        writeln!(out, "{}", url)?;
    }
    Ok(())
}
