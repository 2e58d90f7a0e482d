//! Byte-level Windows drive-letter checks.
//!
//! Only ASCII `A-Z` / `a-z` count as drive letters; nothing here is locale-aware.

/// ASCII letter check used for drive letters.
pub(crate) fn is_drive_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// `X:` followed by anything (including nothing).
pub(crate) fn has_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && is_drive_letter(b[0]) && b[1] == b':'
}

/// A URL host that is really a misplaced drive letter: exactly `X:`.
pub(crate) fn is_drive_host(host: &str) -> bool {
    host.len() == 2 && has_drive_prefix(host)
}

/// Turns `/X:...` back into `X:...`; any other path is returned unchanged.
pub(crate) fn strip_drive_slash(path: &str) -> &str {
    match path.strip_prefix('/') {
        Some(rest) if has_drive_prefix(rest) => rest,
        _ => path,
    }
}
