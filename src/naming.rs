//! Property naming strategy
//!
//! Schema property names are free-form JSON strings; generated members need
//! identifiers. A [`NameResolver`] maps one to the other. Rules receive it by
//! injection so generators can plug in their own conventions.

use crate::config::GenerationConfig;
use crate::schema::SchemaNode;

/// Schema keyword that overrides the generated field name
pub const FIELD_NAME_KEYWORD: &str = "fieldName";

/// Words that cannot be used as field names as-is
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Maps a raw schema property name to the canonical field name
pub trait NameResolver: Send + Sync {
    /// Canonical field name for `raw_name`. `node` is the property's schema,
    /// when the caller found one.
    fn property_name(&self, raw_name: &str, node: Option<&SchemaNode>) -> String;
}

impl<F> NameResolver for F
where
    F: Fn(&str, Option<&SchemaNode>) -> String + Send + Sync,
{
    fn property_name(&self, raw_name: &str, node: Option<&SchemaNode>) -> String {
        self(raw_name, node)
    }
}

/// Default naming strategy: camelCase identifiers
#[derive(Debug, Clone)]
pub struct NameHelper {
    /// Characters that separate words
    word_delimiters: Vec<char>,
}

impl NameHelper {
    /// Create a helper splitting words on the given delimiters
    pub fn new(word_delimiters: impl IntoIterator<Item = char>) -> Self {
        Self {
            word_delimiters: word_delimiters.into_iter().collect(),
        }
    }

    /// Create a helper using the configured delimiters
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.property_word_delimiters.iter().copied())
    }

    /// Replace characters that cannot appear in an identifier with `_`
    fn replace_illegal_characters(&self, name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '$' || self.word_delimiters.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Join words separated by delimiters, capitalizing all but the first
    fn camel_case(&self, name: &str) -> String {
        let mut words = name
            .split(|c| self.word_delimiters.contains(&c))
            .filter(|w| !w.is_empty());
        let mut result = match words.next() {
            Some(first) => first.to_string(),
            None => return String::new(),
        };
        for word in words {
            let mut chars = word.chars();
            if let Some(c) = chars.next() {
                result.extend(c.to_uppercase());
                result.push_str(chars.as_str());
            }
        }
        result
    }

    /// Normalize a raw property name into an identifier
    pub fn normalize_name(&self, name: &str) -> String {
        let replaced = self.replace_illegal_characters(name);
        let mut normalized = self.camel_case(&replaced);

        // all-caps names such as "URL" keep their case
        let all_upper = normalized.chars().all(|c| !c.is_lowercase());
        if !all_upper {
            let mut chars = normalized.chars();
            if let Some(first) = chars.next() {
                normalized = first.to_lowercase().chain(chars).collect();
            }
        }

        let starts_with_digit = normalized.chars().next().map_or(false, |c| c.is_ascii_digit());
        if normalized.is_empty() || starts_with_digit || RESERVED_WORDS.contains(&normalized.as_str()) {
            normalized.insert(0, '_');
        }
        normalized
    }
}

impl Default for NameHelper {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

impl NameResolver for NameHelper {
    fn property_name(&self, raw_name: &str, node: Option<&SchemaNode>) -> String {
        let explicit = node
            .and_then(|n| n.get(FIELD_NAME_KEYWORD))
            .and_then(|n| n.as_str());
        match explicit {
            Some(name) => name.to_string(),
            None => self.normalize_name(raw_name),
        }
    }
}
