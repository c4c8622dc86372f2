//! Source locator resolution
//!
//! A locator names where a schema comes from. It is either a bare filesystem
//! path or a string with a protocol tag before the first colon
//! (`http://...`, `classpath:/...`). Resolution only checks syntax; nothing
//! is fetched here.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Protocol of a source locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlProtocol {
    /// Bare filesystem path
    NoProtocol,
    /// `file:` URL
    File,
    /// `resource:` bundled resource
    Resource,
    /// `java:` named type
    Java,
    /// `classpath:` resource
    Classpath,
    /// `http:` URL
    Http,
    /// `https:` URL
    Https,
}

impl UrlProtocol {
    /// All protocols, in lookup order
    pub const ALL: [UrlProtocol; 7] = [
        UrlProtocol::NoProtocol,
        UrlProtocol::File,
        UrlProtocol::Resource,
        UrlProtocol::Java,
        UrlProtocol::Classpath,
        UrlProtocol::Http,
        UrlProtocol::Https,
    ];

    /// The tag written before the colon
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlProtocol::NoProtocol => "",
            UrlProtocol::File => "file",
            UrlProtocol::Resource => "resource",
            UrlProtocol::Java => "java",
            UrlProtocol::Classpath => "classpath",
            UrlProtocol::Http => "http",
            UrlProtocol::Https => "https",
        }
    }

    /// Look up a protocol by tag (ASCII case-insensitive).
    /// Unknown tags are treated as plain paths.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(UrlProtocol::NoProtocol)
    }

    /// Check if the protocol refers to a network resource
    pub fn is_remote(&self) -> bool {
        matches!(self, UrlProtocol::Http | UrlProtocol::Https)
    }
}

impl fmt::Display for UrlProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlProtocol::NoProtocol => write!(f, "(none)"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Classify a locator by the text before its first colon.
/// A locator without a colon is a plain path, whatever its name.
pub fn parse_protocol(input: &str) -> UrlProtocol {
    match input.split_once(':') {
        Some((tag, _)) => UrlProtocol::from_tag(tag),
        None => UrlProtocol::NoProtocol,
    }
}

/// Resolve a locator to a URL.
///
/// Bare paths become absolute `file:` URLs; anything with a known protocol
/// is parsed as a URL.
pub fn parse_url(input: &str) -> Result<Url> {
    match parse_protocol(input) {
        UrlProtocol::NoProtocol => {
            let path = Path::new(input);
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map_err(|e| Error::invalid_locator(input, e))?
                    .join(path)
            };
            Url::from_file_path(&absolute).map_err(|_| {
                Error::invalid_locator(input, "path cannot be represented as a file URL")
            })
        }
        protocol => {
            tracing::trace!(input, %protocol, "parsing locator as URL");
            Url::parse(input).map_err(|e| Error::invalid_locator(input, e))
        }
    }
}

/// Convert a `file:` URL back to a local path
pub fn file_from_url(url: &Url) -> Result<PathBuf> {
    if url.scheme() != "file" {
        return Err(Error::invalid_locator(url.as_str(), "not a file URL"));
    }
    url.to_file_path()
        .map_err(|_| Error::invalid_locator(url.as_str(), "URL does not denote a local path"))
}
