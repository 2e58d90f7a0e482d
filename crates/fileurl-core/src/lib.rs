//! Round-trip local file paths through `file://` URLs.
//!
//! Handles POSIX paths (`/usr/bin/vi`), Windows drive-letter paths
//! (`c:/windows/notepad.exe`), and the malformed `file://c:/...` form that puts the
//! drive letter in the host.

pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod parts;

mod drive;

pub use convert::{local_to_url, url_to_local, url_to_local_relaxed, Mode};
pub use error::ConversionError;
pub use parts::UrlParts;
pub use url::Url;
