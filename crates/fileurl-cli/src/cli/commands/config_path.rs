//! Config-path command: show where the configuration file lives.

use anyhow::Result;
use fileurl_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
