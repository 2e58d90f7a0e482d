//! Tests for the to-url command.

use super::parse;
use clap::Parser;
use crate::cli::commands::write_urls;
use crate::cli::CliCommand;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn cli_parse_to_url() {
    match parse(&["fileurl", "to-url", "/usr/bin/vi", "c:/windows/notepad.exe"]) {
        CliCommand::ToUrl { paths } => {
            assert_eq!(paths, vec!["/usr/bin/vi", "c:/windows/notepad.exe"])
        }
        _ => panic!("expected ToUrl"),
    }
}

#[test]
fn cli_parse_to_url_needs_a_path() {
    assert!(crate::cli::Cli::try_parse_from(["fileurl", "to-url"]).is_err());
}

#[test]
fn to_url_prints_one_line_per_path() {
    let mut out = Vec::new();
    write_urls(&mut out, &strings(&["/usr/bin/vi", "c:/windows/notepad.exe"])).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "file:///usr/bin/vi\nfile:///c:/windows/notepad.exe\n"
    );
}

#[test]
fn to_url_stops_at_first_failure() {
    let mut out = Vec::new();
    let err = write_urls(
        &mut out,
        &strings(&["/ok", "//server/share/file", "/never"]),
    )
    .unwrap_err();
    assert_eq!(String::from_utf8(out).unwrap(), "file:///ok\n");
    let msg = format!("{:#}", err);
    assert!(msg.contains("//server/share/file"), "{msg}");
    assert!(msg.contains("remote"), "{msg}");
}

#[test]
fn to_url_relative_path_error() {
    let mut out = Vec::new();
    let err = write_urls(&mut out, &strings(&["3:/windows/notepad.exe"])).unwrap_err();
    assert!(format!("{:#}", err).contains("not absolute"));
}
