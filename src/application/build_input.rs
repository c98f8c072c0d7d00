//! Build Input Assembly
//!
//! Turns a named list into the file list handed to a build or test runner:
//!
//! 1. resolve the list
//! 2. drop paths rejected by the caller's filter
//! 3. subtract the exclusion list (explicit, or the `<list><suffix>` companion)
//! 4. prepend base entries unconditionally
//!
//! Prepended entries are never filtered or excluded. A resolved path equal to a
//! prepended one is dropped so the output stays duplicate-free.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{ManifestStore, NamedList, ResolveError};
use crate::domain::policies::{EntryFilter, SubstringFilter};
use crate::domain::services::{ResolutionIssue, Resolver};
use crate::domain::value_objects::Entry;

/// Name given to the ad hoc list combining every exclusion source.
pub const EXCLUSIONS_LIST: &str = "<exclusions>";

/// What to assemble and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInputRequest {
    /// List to resolve
    pub list: String,
    /// Named exclusion list; must exist in the store
    pub exclude_list: Option<String>,
    /// Literal paths (or `@name` references) to exclude in addition
    pub exclude_entries: Vec<Entry>,
    /// Companion suffix used when no `exclude_list` is given
    pub companion_suffix: Option<String>,
    /// Entries placed first, untouched by filter and exclusions
    pub prepend: Vec<String>,
    /// Secondary exclusion predicate
    pub filter: SubstringFilter,
}

impl BuildInputRequest {
    pub fn new(list: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            ..Self::default()
        }
    }

    pub fn with_exclude_list(mut self, name: impl Into<String>) -> Self {
        self.exclude_list = Some(name.into());
        self
    }

    pub fn with_exclude_entries(mut self, entries: Vec<Entry>) -> Self {
        self.exclude_entries = entries;
        self
    }

    /// Use `<list><suffix>` as the exclusion list when it exists and no
    /// explicit exclusion list was given.
    pub fn with_companion_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.companion_suffix = (!suffix.is_empty()).then_some(suffix);
        self
    }

    pub fn with_prepend(mut self, prepend: Vec<String>) -> Self {
        self.prepend = prepend;
        self
    }

    pub fn with_filter(mut self, filter: SubstringFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Assembled runner input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildInput {
    pub list: String,
    /// Final ordered file list
    pub files: Vec<String>,
    /// Exclusion list that was applied, if any
    pub exclusion_list: Option<String>,
    /// Resolved exclusion paths, for runners that take a separate exclude list
    pub excluded: Vec<String>,
    /// Resolved paths dropped by the filter
    pub filtered: Vec<String>,
    pub issues: Vec<ResolutionIssue>,
}

impl BuildInput {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Assemble the runner input for `request.list`.
///
/// Fails only when the list or the explicit exclusion list is unknown.
pub fn assemble(
    store: &ManifestStore,
    request: &BuildInputRequest,
) -> Result<BuildInput, ResolveError> {
    let resolver = Resolver::new(store);
    let resolved = resolver.resolve(&request.list)?;

    let exclusion_list = match &request.exclude_list {
        Some(name) => Some(store.get(name)?.name().to_string()),
        None => request
            .companion_suffix
            .as_ref()
            .map(|suffix| format!("{}{}", request.list, suffix))
            .filter(|name| store.has(name)),
    };
    if let Some(name) = &exclusion_list {
        tracing::debug!(list = %request.list, exclusions = %name, "using exclusion list");
    }

    let mut exclusion_entries: Vec<Entry> = exclusion_list.iter().map(Entry::reference).collect();
    exclusion_entries.extend(request.exclude_entries.iter().cloned());
    let exclusions = resolver.resolve_list(&NamedList::new(EXCLUSIONS_LIST, exclusion_entries));

    let filtered: Vec<String> = resolved
        .paths()
        .iter()
        .filter(|p| request.filter.rejects(p))
        .cloned()
        .collect();
    let kept = resolved.filtered(&request.filter).subtract(&exclusions);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut files = Vec::with_capacity(request.prepend.len() + kept.len());
    for path in request.prepend.iter().chain(kept.paths()) {
        if seen.insert(path.as_str()) {
            files.push(path.clone());
        }
    }

    Ok(BuildInput {
        list: request.list.clone(),
        files,
        exclusion_list,
        excluded: exclusions.into_paths(),
        filtered,
        issues: kept.issues().to_vec(),
    })
}
