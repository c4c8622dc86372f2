//! Schema id to package path conversion
//!
//! A schema id becomes a package (namespace) path by splitting it on its
//! delimiter. Before that, the id is checked: it must not contain any illegal
//! symbol and must use a single kind of delimiter throughout.

use crate::error::{Error, IdentifierIssue, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters that may separate package segments
pub const LEGAL_DELIMITERS: [char; 5] = ['.', '/', '\\', ':', '_'];

static ILLEGAL_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!&?\-;~,#@*+%{}()<>\[\]|"'^]"#).unwrap());

static LEGAL_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[./\\:_]").unwrap());

/// How strictly schema ids are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierPolicy {
    /// Compatible with existing generated packages. An id whose first
    /// delimiter is `_` is always reported as mixed, and empty segments
    /// (`a..b`, `.a`, `a.`) pass.
    #[default]
    Legacy,
    /// `_` is treated like every other delimiter, and empty segments are
    /// rejected.
    Strict,
}

/// Delimiters that must not appear once `first` has been seen
fn other_delimiters(first: char, policy: IdentifierPolicy) -> Vec<char> {
    // legacy: ids starting with '_' drop ':' from the set instead of '_'
    let excluded = match (policy, first) {
        (IdentifierPolicy::Legacy, '_') => ':',
        _ => first,
    };
    LEGAL_DELIMITERS
        .iter()
        .copied()
        .filter(|c| *c != excluded)
        .collect()
}

/// Check a schema id. Returns the delimiter it uses, or `None` when the id
/// is a single segment.
fn check_schema_id(schema_id: &str, policy: IdentifierPolicy) -> Result<Option<char>> {
    if ILLEGAL_SYMBOL.is_match(schema_id) {
        return Err(Error::invalid_identifier(schema_id, IdentifierIssue::IllegalSymbol));
    }

    let first = match LEGAL_SYMBOL.find(schema_id) {
        Some(m) => m.as_str().chars().next(),
        None => None,
    };
    let Some(delimiter) = first else {
        return Ok(None);
    };

    let others = other_delimiters(delimiter, policy);
    if schema_id.chars().any(|c| others.contains(&c)) {
        return Err(Error::invalid_identifier(schema_id, IdentifierIssue::MixedSymbols));
    }

    if policy == IdentifierPolicy::Strict && schema_id.split(delimiter).any(str::is_empty) {
        return Err(Error::invalid_identifier(schema_id, IdentifierIssue::EmptySegment));
    }

    Ok(Some(delimiter))
}

/// Run the checks and log the outcome
fn validate(schema_id: &str, policy: IdentifierPolicy) -> Result<Option<char>> {
    let result = check_schema_id(schema_id, policy);
    match &result {
        Ok(delimiter) => tracing::trace!(schema_id, ?delimiter, "schema id accepted"),
        Err(e) => tracing::debug!(schema_id, error = %e, "schema id rejected"),
    }
    result
}

/// Validate a schema id before it is used to derive a package path.
///
/// The id is returned unchanged on success; splitting is left to
/// [`package_segments`].
pub fn normalize_schema_id(schema_id: &str, policy: IdentifierPolicy) -> Result<&str> {
    validate(schema_id, policy)?;
    Ok(schema_id)
}

/// Validate a schema id and split it into package segments.
///
/// Empty segments are dropped (they can only occur under the legacy policy).
pub fn package_segments(schema_id: &str, policy: IdentifierPolicy) -> Result<Vec<String>> {
    let segments = match validate(schema_id, policy)? {
        Some(delimiter) => schema_id
            .split(delimiter)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None if schema_id.is_empty() => Vec::new(),
        None => vec![schema_id.to_string()],
    };
    Ok(segments)
}

/// Validate a schema id and render it as a dotted package name
pub fn package_name(schema_id: &str, policy: IdentifierPolicy) -> Result<String> {
    Ok(package_segments(schema_id, policy)?.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, policy: IdentifierPolicy) -> Option<IdentifierIssue> {
        normalize_schema_id(id, policy)
            .err()
            .and_then(|e| e.identifier_issue())
    }

    #[test]
    fn test_single_delimiter_kind_accepted() {
        for id in ["a.b.c", "a/b/c", r"a\b\c", "a:b:c"] {
            assert_eq!(normalize_schema_id(id, IdentifierPolicy::Legacy).unwrap(), id);
            assert_eq!(normalize_schema_id(id, IdentifierPolicy::Strict).unwrap(), id);
        }
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(
            normalize_schema_id("simpleName", IdentifierPolicy::Legacy).unwrap(),
            "simpleName"
        );
        assert_eq!(normalize_schema_id("", IdentifierPolicy::Legacy).unwrap(), "");
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(issue("a.b/c", IdentifierPolicy::Legacy), Some(IdentifierIssue::MixedSymbols));
        assert_eq!(issue("a:b.c", IdentifierPolicy::Legacy), Some(IdentifierIssue::MixedSymbols));
        assert_eq!(issue(r"a\b/c", IdentifierPolicy::Strict), Some(IdentifierIssue::MixedSymbols));
    }

    #[test]
    fn test_illegal_symbols() {
        for id in ["a!b", "a-b", "a b?", "x#y", "a[0]", "it's", "a^b", "q\"q"] {
            assert_eq!(
                issue(id, IdentifierPolicy::Legacy),
                Some(IdentifierIssue::IllegalSymbol),
                "{} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_illegal_checked_before_mixed() {
        assert_eq!(issue("a.b/c!", IdentifierPolicy::Legacy), Some(IdentifierIssue::IllegalSymbol));
    }

    #[test]
    fn test_legacy_underscore_always_mixed() {
        assert_eq!(issue("my_schema", IdentifierPolicy::Legacy), Some(IdentifierIssue::MixedSymbols));
        assert_eq!(issue("a_b_c", IdentifierPolicy::Legacy), Some(IdentifierIssue::MixedSymbols));
        // underscore after another delimiter is a plain mix
        assert_eq!(issue("a.b_c", IdentifierPolicy::Legacy), Some(IdentifierIssue::MixedSymbols));
    }

    #[test]
    fn test_strict_underscore_accepted() {
        assert_eq!(
            normalize_schema_id("a_b_c", IdentifierPolicy::Strict).unwrap(),
            "a_b_c"
        );
        assert_eq!(issue("a_b:c", IdentifierPolicy::Strict), Some(IdentifierIssue::MixedSymbols));
    }

    #[test]
    fn test_empty_segments() {
        for id in ["a..b", ".a", "a.", "a//b"] {
            assert_eq!(normalize_schema_id(id, IdentifierPolicy::Legacy).unwrap(), id);
            assert_eq!(issue(id, IdentifierPolicy::Strict), Some(IdentifierIssue::EmptySegment));
        }
    }

    #[test]
    fn test_package_segments() {
        assert_eq!(
            package_segments("com/example/person", IdentifierPolicy::Legacy).unwrap(),
            vec!["com", "example", "person"]
        );
        assert_eq!(
            package_segments("simpleName", IdentifierPolicy::Legacy).unwrap(),
            vec!["simpleName"]
        );
        assert_eq!(
            package_segments("a..b.", IdentifierPolicy::Legacy).unwrap(),
            vec!["a", "b"]
        );
        assert!(package_segments("", IdentifierPolicy::Legacy).unwrap().is_empty());
        assert!(package_segments("a.b/c", IdentifierPolicy::Legacy).is_err());
    }

    #[test]
    fn test_package_name() {
        assert_eq!(
            package_name(r"com\example\types", IdentifierPolicy::Legacy).unwrap(),
            "com.example.types"
        );
        assert_eq!(
            package_name("org_acme", IdentifierPolicy::Strict).unwrap(),
            "org.acme"
        );
        assert!(package_name("org_acme", IdentifierPolicy::Legacy).is_err());
    }
}
