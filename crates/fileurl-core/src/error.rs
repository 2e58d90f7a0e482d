//! Conversion error kinds.

use thiserror::Error;

/// Why a local path or URL could not be converted.
///
/// Every variant is terminal: nothing is retried and no partial result is produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// The path is neither POSIX-absolute nor drive-letter-absolute, or the URL string
    /// has no scheme.
    #[error("path or URL is not absolute")]
    Relative,

    /// The path or URL references a non-local resource (a `//server/share` path, or a
    /// URL host that is not a misplaced drive letter).
    #[error("path or URL references a remote location")]
    Remote,

    /// The URL carries something a bare local path cannot hold: a scheme other than
    /// `file`, a query, a fragment, user info, or an empty path.
    #[error("URL uses an unsupported scheme, query, fragment, or user info")]
    Unsupported,
}

impl ConversionError {
    /// True when a network-aware handler might still resolve the input.
    pub fn is_remote(&self) -> bool {
        matches!(self, ConversionError::Remote)
    }
}
