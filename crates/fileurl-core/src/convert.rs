//! Conversions between local paths and `file://` URLs.
//!
//! Local paths come in two shapes: POSIX (`/usr/bin/vi`) and Windows drive-letter
//! (`c:/windows/notepad.exe`). A drive-letter path is stored in the URL as `/c:/...`
//! and that leading slash is removed again on the way back, so both shapes
//! round-trip unchanged. Separators are never translated; a `\` stays a `\`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::drive;
use crate::error::ConversionError;
use crate::parts::UrlParts;

const FILE_SCHEME: &str = "file";

/// Bytes escaped before the path reaches the URL parser.
///
/// The WHATWG parser strips tabs and newlines, turns `\` into `/` and reads `c|` as a
/// drive letter in `file` URLs; escaping those keeps the decoded path byte-for-byte
/// equal to the input.
const LOCAL_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'\\')
    .add(b'?')
    .add(b'#')
    .add(b'|');

/// Creates a `file:///...` URL for a local path.
///
/// Paths with `.` or `..` segments are rejected with [`ConversionError::Relative`]:
/// the URL parser would collapse them and the path could not come back unchanged.
///
/// # Examples
///
/// - `local_to_url("/usr/bin/vi")` → `file:///usr/bin/vi`
/// - `local_to_url("c:/windows/notepad.exe")` → `file:///c:/windows/notepad.exe`
/// - `local_to_url("//server/share/file")` → [`ConversionError::Remote`]
pub fn local_to_url(path: &str) -> Result<Url, ConversionError> {
    if path.starts_with("//") {
        return Err(ConversionError::Remote);
    }

    let slash = if path.starts_with('/') {
        ""
    } else if drive::has_drive_prefix(path) {
        "/"
    } else {
        return Err(ConversionError::Relative);
    };

    if has_dot_segment(path) {
        return Err(ConversionError::Relative);
    }

    let encoded = utf8_percent_encode(path, LOCAL_PATH);
    Url::parse(&format!("{FILE_SCHEME}://{slash}{encoded}")).map_err(|_| ConversionError::Relative)
}

fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "." || segment == "..")
}

/// Extracts a local path from a `file` URL.
///
/// Any non-empty host is reported as [`ConversionError::Remote`], even one that
/// looks like a misplaced drive letter. Use [`url_to_local_relaxed`] to accept those.
pub fn url_to_local<'a>(url: impl Into<UrlParts<'a>>) -> Result<String, ConversionError> {
    let url = url.into();
    if !url.host.is_empty() {
        return Err(ConversionError::Remote);
    }
    extract_local(url)
}

/// Like [`url_to_local`], but also accepts the malformed `file://c:/path` form where
/// the drive letter landed in the host.
///
/// The scheme, query, fragment, user-info and path checks run before the host is
/// looked at, so `smb://server/share` is [`ConversionError::Unsupported`] here but
/// [`ConversionError::Remote`] under [`url_to_local`].
pub fn url_to_local_relaxed<'a>(url: impl Into<UrlParts<'a>>) -> Result<String, ConversionError> {
    extract_local(url.into())
}

fn extract_local(url: UrlParts<'_>) -> Result<String, ConversionError> {
    let non_empty = |s: Option<&str>| s.is_some_and(|s| !s.is_empty());
    if !url.scheme.eq_ignore_ascii_case(FILE_SCHEME)
        || non_empty(url.query)
        || non_empty(url.fragment)
        || url.userinfo.is_some()
        || url.path.is_empty()
    {
        return Err(ConversionError::Unsupported);
    }

    let decoded = percent_decode_str(url.path)
        .decode_utf8()
        .map_err(|_| ConversionError::Unsupported)?;

    let path = if url.host.is_empty() {
        decoded.into_owned()
    } else if drive::is_drive_host(url.host) {
        // host=c: path=/x  =>  /c:/x
        format!("/{}{}", url.host, decoded)
    } else {
        return Err(ConversionError::Remote);
    };

    Ok(drive::strip_drive_slash(&path).to_string())
}

/// Which URL-to-path conversion to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// [`url_to_local`]: every non-empty host is remote.
    #[default]
    Strict,
    /// [`url_to_local_relaxed`]: a `X:` host is folded back into the path.
    Relaxed,
}

impl Mode {
    pub fn to_local<'a>(self, url: impl Into<UrlParts<'a>>) -> Result<String, ConversionError> {
        match self {
            Mode::Strict => url_to_local(url),
            Mode::Relaxed => url_to_local_relaxed(url),
        }
    }
}
