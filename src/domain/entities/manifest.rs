//! Manifest store
//!
//! Holds the named lists of one manifest. Construction is the only mutation
//! point; afterwards the store is read-only and can be shared freely.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::entities::NamedList;
use crate::domain::value_objects::{closest_match, EntryParseError};

/// Errors raised while building a store from manifest data.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("Manifest not found: {path}\n  → Fix: Create the file or pass --manifest <PATH>")]
    NotFound { path: PathBuf },

    #[error("Failed to read manifest {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Invalid {format} manifest {path}: {message}\n  → Fix: The manifest must map list names to arrays of strings")]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Unsupported manifest format: {path}\n  → Fix: Use a .toml, .json, .yaml or .yml file")]
    UnsupportedFormat { path: PathBuf },

    #[error("duplicate list name '{name}'")]
    DuplicateList { name: String },

    #[error("list names must not be empty")]
    EmptyListName,

    #[error("invalid entry #{} in list '{list}': {source}", .index + 1)]
    InvalidEntry {
        list: String,
        index: usize,
        source: EntryParseError,
    },
}

/// Errors that abort a resolution request.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown list '{name}'{}", did_you_mean(.suggestion))]
    UnknownList {
        name: String,
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!("\n  → Did you mean '{}'?", s),
        None => String::new(),
    }
}

/// Mapping from list name to [`NamedList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestStore {
    lists: HashMap<String, NamedList>,
}

impl ManifestStore {
    /// Build a store from already-classified lists.
    pub fn from_lists<I>(lists: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = NamedList>,
    {
        let mut map = HashMap::new();
        for list in lists {
            if list.name().is_empty() {
                return Err(ManifestError::EmptyListName);
            }
            if map.contains_key(list.name()) {
                return Err(ManifestError::DuplicateList {
                    name: list.name().to_string(),
                });
            }
            map.insert(list.name().to_string(), list);
        }
        Ok(Self { lists: map })
    }

    /// Build a store from raw manifest data: list name → source strings.
    ///
    /// Every string is classified into an [`Entry`](crate::domain::value_objects::Entry)
    /// here, so resolution never looks at `@` prefixes again.
    pub fn from_raw<I, S>(raw: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = (String, Vec<S>)>,
        S: AsRef<str>,
    {
        let lists = raw
            .into_iter()
            .map(|(name, entries)| {
                NamedList::parse(name.clone(), &entries).map_err(|(index, source)| {
                    ManifestError::InvalidEntry {
                        list: name,
                        index,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_lists(lists)
    }

    /// Look up a list by name.
    pub fn get(&self, name: &str) -> Result<&NamedList, ResolveError> {
        self.lists
            .get(name)
            .ok_or_else(|| ResolveError::UnknownList {
                name: name.to_string(),
                suggestion: closest_match(name, self.lists.keys().map(String::as_str)),
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    pub(crate) fn find(&self, name: &str) -> Option<&NamedList> {
        self.lists.get(name)
    }

    /// List names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Lists in name order.
    pub fn lists(&self) -> impl Iterator<Item = &NamedList> {
        self.names()
            .into_iter()
            .filter_map(move |name| self.lists.get(name))
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
