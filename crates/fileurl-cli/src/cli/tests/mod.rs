//! CLI parse and command output tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

mod to_url;

#[test]
fn cli_parse_config_path() {
    match parse(&["fileurl", "config-path"]) {
        CliCommand::ConfigPath => {}
        _ => panic!("expected ConfigPath"),
    }
}

#[test]
fn cli_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["fileurl", "to-url", "/a", "--config", "/tmp/f.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/f.toml")));
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["fileurl"]).is_err());
}

#[test]
fn load_config_from_explicit_file() {
    use fileurl_core::Mode;
    use std::io::Write;

    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "default_mode = \"relaxed\"").unwrap();
    f.flush().unwrap();
    let path = f.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["fileurl", "--config", path, "config-path"]).unwrap();
    let cfg = cli.load_config().unwrap();
    assert_eq!(cfg.default_mode, Mode::Relaxed);
}
