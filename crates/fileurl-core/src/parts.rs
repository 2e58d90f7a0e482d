//! Structured view of a URL's components.
//!
//! `url::Url` follows the WHATWG parser, which repairs `file://c:/x` into
//! `file:///c:/x` before anyone can look at it. [`UrlParts::parse`] splits a URL
//! string by the generic RFC 3986 syntax instead and keeps the authority exactly as
//! written, so the relaxed conversion can see a drive letter sitting in the host.

use std::fmt;

use url::{Position, Url};

use crate::error::ConversionError;

/// Borrowed URL components. All strings are as they appear in the URL (still
/// percent-encoded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    /// Everything before `@` in the authority, if there was an `@`.
    pub userinfo: Option<&'a str>,
    /// Host including any `:port`; empty when there is no authority.
    pub host: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
    /// Whether the URL had a `//` authority section at all.
    pub has_authority: bool,
}

impl<'a> UrlParts<'a> {
    /// Split `input` into components without normalizing anything.
    ///
    /// Fails with [`ConversionError::Relative`] when `input` has no scheme.
    pub fn parse(input: &'a str) -> Result<Self, ConversionError> {
        let (scheme, rest) = split_scheme(input).ok_or(ConversionError::Relative)?;

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        let (userinfo, host) = match authority {
            Some(authority) => match authority.rsplit_once('@') {
                Some((userinfo, host)) => (Some(userinfo), host),
                None => (None, authority),
            },
            None => (None, ""),
        };

        Ok(Self {
            scheme,
            userinfo,
            host,
            path,
            query,
            fragment,
            has_authority: authority.is_some(),
        })
    }
}

/// `scheme ":" rest`, where scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once(':')?;
    let mut bytes = scheme.bytes();
    let starts_alpha = bytes.next().is_some_and(|b| b.is_ascii_alphabetic());
    let valid = starts_alpha && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));
    valid.then_some((scheme, rest))
}

impl<'a> From<&'a Url> for UrlParts<'a> {
    fn from(url: &'a Url) -> Self {
        let userinfo = &url[Position::BeforeUsername..Position::AfterPassword];
        Self {
            scheme: url.scheme(),
            userinfo: (!userinfo.is_empty()).then_some(userinfo),
            host: &url[Position::BeforeHost..Position::AfterPort],
            path: url.path(),
            query: url.query(),
            fragment: url.fragment(),
            has_authority: url.has_authority(),
        }
    }
}

impl fmt::Display for UrlParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if self.has_authority {
            f.write_str("//")?;
            if let Some(userinfo) = self.userinfo {
                write!(f, "{}@", userinfo)?;
            }
            f.write_str(self.host)?;
        }
        f.write_str(self.path)?;
        if let Some(query) = self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
