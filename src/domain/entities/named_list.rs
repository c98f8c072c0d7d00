//! Named list entity
//!
//! An ordered, immutable collection of entries keyed by name.

use serde::Serialize;

use crate::domain::value_objects::{Entry, EntryParseError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedList {
    name: String,
    entries: Vec<Entry>,
}

impl NamedList {
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Build a list from raw manifest strings, classifying each one.
    ///
    /// On failure returns the zero-based index of the offending entry.
    pub fn parse<S: AsRef<str>>(
        name: impl Into<String>,
        raw: &[S],
    ) -> Result<Self, (usize, EntryParseError)> {
        let entries = raw
            .iter()
            .enumerate()
            .map(|(idx, s)| Entry::parse(s.as_ref()).map_err(|e| (idx, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, entries))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names referenced directly by this list, in entry order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(Entry::as_reference)
    }

    /// Number of literal entries that are glob patterns.
    pub fn pattern_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_pattern()).count()
    }
}
