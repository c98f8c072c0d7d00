//! Entry value object - one item of a named list
//!
//! - `Literal`: a concrete path or glob pattern, opaque to resolution
//! - `Reference`: a symbolic pointer to another named list (`@name`)

use std::fmt;

use serde::{Serialize, Serializer};

/// Prefix that marks a reference in manifest source notation.
pub const REFERENCE_MARKER: char = '@';

/// Characters that make a literal a glob pattern rather than a concrete path.
const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

/// A single entry of a named list, classified once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A file path or glob pattern
    Literal(String),
    /// A reference to another named list
    Reference(String),
}

/// Error raised when a raw manifest string cannot be classified.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EntryParseError {
    #[error("empty reference: '{marker}' must be followed by a list name")]
    EmptyReference { marker: char },

    #[error("empty entry: entries must be a path, a pattern or '@name'")]
    Empty,
}

impl Entry {
    /// Classify a raw manifest string.
    ///
    /// Strings starting with `@` become references; everything else is kept
    /// verbatim as a literal.
    pub fn parse(raw: &str) -> Result<Self, EntryParseError> {
        if raw.is_empty() {
            return Err(EntryParseError::Empty);
        }
        match raw.strip_prefix(REFERENCE_MARKER) {
            Some("") => Err(EntryParseError::EmptyReference {
                marker: REFERENCE_MARKER,
            }),
            Some(name) => Ok(Entry::Reference(name.to_string())),
            None => Ok(Entry::Literal(raw.to_string())),
        }
    }

    pub fn literal(path: impl Into<String>) -> Self {
        Entry::Literal(path.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Entry::Reference(name.into())
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Entry::Reference(_))
    }

    /// Returns true for literals containing glob wildcards.
    ///
    /// Patterns are never expanded here; this only lets callers tell them apart.
    pub fn is_pattern(&self) -> bool {
        match self {
            Entry::Literal(path) => is_glob_pattern(path),
            Entry::Reference(_) => false,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Entry::Literal(path) => Some(path),
            Entry::Reference(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Entry::Reference(name) => Some(name),
            Entry::Literal(_) => None,
        }
    }
}

/// Returns true if `path` contains any glob wildcard character.
pub fn is_glob_pattern(path: &str) -> bool {
    path.contains(GLOB_CHARS)
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Literal(path) => write!(f, "{}", path),
            Entry::Reference(name) => write!(f, "{}{}", REFERENCE_MARKER, name),
        }
    }
}

// Serialized back to manifest notation so JSON output round-trips into a manifest.
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
