//! To-local command: file:// URLs to local paths.

use anyhow::{Context, Result};
use fileurl_core::{Mode, UrlParts};
use std::io::{self, Write};

/// Print one local path per URL; stops at the first URL that cannot be converted.
pub fn run_to_local(urls: &[String], mode: Mode) -> Result<()> {
    let stdout = io::stdout();
    write_local_paths(&mut stdout.lock(), urls, mode)
}

pub(crate) fn write_local_paths<W: Write>(out: &mut W, urls: &[String], mode: Mode) -> Result<()> {
    for url in urls {
        // Split by generic syntax so a drive letter in the host is still visible.
        let parts = UrlParts::parse(url).with_context(|| format!("cannot parse URL {url:?}"))?;
        let path = mode.to_local(parts).map_err(|err| {
            let hint = if err.is_remote() && mode == Mode::Strict && parts.host.ends_with(':') {
                "; --relaxed accepts a drive letter in the host"
            } else {
                ""
            };
            anyhow::Error::new(err).context(format!("cannot convert URL {url:?} ({mode:?}){hint}"))
        })?;
        tracing::debug!(%url, %path, ?mode, "converted URL");
        writeln!(out, "{}", path)?;
    }
    Ok(())
}
